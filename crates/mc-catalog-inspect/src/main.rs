use std::sync::Arc;

use mc_catalog::{
    CATEGORY_PREFIX, Catalog, CatalogBuilder, CatalogConfig, Category, Identity, IdentityKind,
    Item, Member, Mob, Version, format_id, vanilla,
};
use tracing::{info, warn};

fn report_identity(catalog: &Catalog, identity: &Arc<Identity>) {
    let version = catalog.platform_version();

    info!(
        "{} ({}) - {} [species {}]",
        identity.key(),
        identity.display_name(),
        identity.kind(),
        identity.species()
    );
    if let Some(previous) = identity.previous() {
        info!("  split from {}", previous.key());
    }
    if let Some(legacy_key) = identity.legacy_key() {
        info!("  legacy id {}", legacy_key);
    }

    match identity.resolve(version) {
        Ok(representation) => match representation.numeric_id() {
            Some(numeric_id) => info!(
                "  on {}: {} #{}",
                version,
                representation.platform_key(),
                numeric_id
            ),
            None => info!("  on {}: {}", version, representation.platform_key()),
        },
        Err(err) => warn!("  {}", err),
    }

    for representation in identity.representations().iter() {
        info!("  {:?} -> {}", representation.range(), representation.platform_key());
    }

    let categories = catalog.categories_of(identity);
    if !categories.is_empty() {
        info!("  categories: {}", categories.join(", "));
    }
}

fn report_category<T: Member>(catalog: &Catalog, category: &Category<T>) {
    let version = catalog.platform_version();
    info!(
        "{}{} ({}) - {} members",
        CATEGORY_PREFIX,
        category.id(),
        category.display_name(),
        category.len()
    );

    let mut members: Vec<&T> = category.iter().collect();
    members.sort_by(|a, b| a.identity().key().cmp(b.identity().key()));

    for member in members {
        let identity = member.identity();
        match identity.resolve(version) {
            Ok(representation) => info!("  {} -> {}", identity.key(), representation.platform_key()),
            Err(_) => info!("  {} (unavailable on {})", identity.key(), version),
        }
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mc_catalog_inspect=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let version: Version = args.get(1).map(|s| s.as_str()).unwrap_or("1.16").parse()?;
    let target = args.get(2).map(|s| s.as_str());
    let overlay = args.get(3);

    let mut builder = CatalogBuilder::new(version);
    vanilla::register(&mut builder)?;
    if let Some(path) = overlay {
        CatalogConfig::load(path)?.apply(&mut builder)?;
        info!("Applied overlay {}", path);
    }
    let catalog = builder.build()?;

    let Some(target) = target else {
        info!("Catalog for {}", version);
        info!("  item categories: {}", catalog.category_ids::<Item>().join(", "));
        info!("  mob categories: {}", catalog.category_ids::<Mob>().join(", "));
        return Ok(());
    };

    if let Some(id) = target.strip_prefix(CATEGORY_PREFIX) {
        match catalog.category_kind(id) {
            Some(IdentityKind::Item) => {
                report_category(&catalog, catalog.require_category::<Item>(id)?);
            }
            Some(IdentityKind::Mob) => {
                report_category(&catalog, catalog.require_category::<Mob>(id)?);
            }
            None => eyre::bail!("unknown category {}", target),
        }
        return Ok(());
    }

    match catalog.resolve_identity_by_id(target) {
        Ok(identity) => report_identity(&catalog, &identity),
        Err(err) => {
            let key = target.to_ascii_uppercase();
            let Some(identity) = catalog.identity_by_platform_key(&key) else {
                return Err(err.into());
            };
            info!("{} is the platform key of {}", key, format_id(identity.key()));
            report_identity(&catalog, identity);
        }
    }

    Ok(())
}
