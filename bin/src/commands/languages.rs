//! Languages command implementation.

use devsalary_lib::prelude::*;

/// List the languages surveyed by the report command, in report order.
pub(crate) fn list_languages(config: &AppConfig) {
    for (index, language) in config.languages.iter().enumerate() {
        println!("{:>3}. {language}", index + 1);
    }

    println!("\nTotal: {} languages", config.languages.len());
}
