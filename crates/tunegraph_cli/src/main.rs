//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tunegraph_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tunegraph_core::{CatalogService, CommunityService, MemoryCatalogRepository, RepoError};

fn main() -> Result<(), RepoError> {
    let repo = MemoryCatalogRepository::new();
    let catalog = CatalogService::new(repo.clone());
    let community = CommunityService::new(repo);

    catalog.create_album("Views", "Drake")?;
    catalog.create_song("One Dance", "Views", 173)?;
    catalog.create_song("Hotline Bling", "Views", 267)?;
    community.create_user("smoke", "0000000000")?;
    community.like_song("0000000000", "One Dance")?;

    println!("tunegraph_core version={}", tunegraph_core::core_version());
    println!(
        "most_liked_artist={}",
        catalog.most_liked_artist()?.unwrap_or_default()
    );
    println!(
        "most_liked_song={}",
        catalog.most_liked_song()?.unwrap_or_default()
    );

    Ok(())
}
