//! Resolve command implementation.
//!
//! This module shows the IDs the configured city and role resolve to on each
//! platform, which is what the report command filters vacancies by.

use anyhow::{Context, Result};
use devsalary_lib::prelude::*;
use devsalary_lib::{headhunter, superjob};
use std::fmt::Display;

/// Print resolved HeadHunter area and role IDs and the SuperJob town ID.
pub(crate) async fn resolve(config: &AppConfig) -> Result<()> {
    let client = ApiClient::with_defaults().context("Failed to create HTTP client")?;

    let area = headhunter::resolve_area(&client, &config.city)
        .await
        .context("HeadHunter area lookup failed")?;
    let role = headhunter::resolve_professional_role(&client, &config.professional_role)
        .await
        .context("HeadHunter professional role lookup failed")?;
    let town = superjob::resolve_town(&client, &config.city)
        .await
        .context("SuperJob town lookup failed")?;

    println!("{:<12} {:<20} {:<24} {}", "PLATFORM", "FILTER", "NAME", "ID");
    println!("{}", "-".repeat(64));
    print_lookup(Platform::HeadHunter, "area", &config.city, &area);
    print_lookup(
        Platform::HeadHunter,
        "professional_role",
        &config.professional_role,
        &role,
    );
    print_lookup(Platform::SuperJob, "town", &config.city, &town);

    Ok(())
}

fn print_lookup<T: Display>(platform: Platform, filter: &str, name: &str, lookup: &Lookup<T>) {
    let id = lookup
        .id()
        .map_or_else(|| "not found".to_string(), ToString::to_string);
    println!("{:<12} {:<20} {:<24} {}", platform.name(), filter, name, id);
}
