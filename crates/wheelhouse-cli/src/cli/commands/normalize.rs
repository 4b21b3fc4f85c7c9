//! `wheelhouse normalize <name>...` – print index directory names.

use wheelhouse_core::name::normalize;

pub fn run_normalize(names: &[String]) {
    for name in names {
        println!("{}", normalize(name));
    }
}
