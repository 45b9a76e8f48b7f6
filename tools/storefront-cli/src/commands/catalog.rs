//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use console::style;
use storefront_app::screens::SliderScreen;
use storefront_commerce::catalog::{ImageKind, Product};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::Categories => categories(ctx).await,
        CatalogCommand::Products { category } => products(category.as_deref(), ctx).await,
        CatalogCommand::Search { query } => search(&query, ctx).await,
        CatalogCommand::Product { slug } => product(&slug, ctx).await,
        CatalogCommand::Banners { play } => banners(play, ctx).await,
    }
}

async fn categories(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let spinner = ctx.output.spinner("Loading categories...");
    let categories = storefront.catalog().categories().await;
    spinner.finish_and_clear();
    let categories = categories.context("Failed to load categories")?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output
            .list_item(&format!("{} {}", category.name, style(&category.slug).dim()));
    }
    Ok(())
}

async fn products(category: Option<&str>, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let home = storefront.home();

    let spinner = ctx.output.spinner("Loading products...");
    home.mount().await;
    let filtered = match category {
        Some(slug) => home.select_category(slug).await,
        None => Ok(()),
    };
    spinner.finish_and_clear();
    if let Some(slug) = category {
        filtered.with_context(|| format!("Failed to load category '{slug}'"))?;
    }

    let products = home.visible_products();
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = match category {
        Some(slug) => format!("Products in {slug}"),
        None => "Featured products".to_string(),
    };
    print_products(&title, &products, ctx);
    Ok(())
}

async fn search(query: &str, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let home = storefront.home();
    home.lifecycle().mount();
    home.set_query(query);

    let spinner = ctx.output.spinner("Searching...");
    let result = home.search().await;
    spinner.finish_and_clear();
    result.context("Search failed")?;

    let results = home.state().search_results;
    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info(&format!("No products match '{}'", query.trim()));
        return Ok(());
    }
    print_products(&format!("Results for '{}'", query.trim()), &results, ctx);
    Ok(())
}

async fn product(slug: &str, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let detail = storefront.product_detail(slug);

    let spinner = ctx.output.spinner("Loading product...");
    let loaded = detail.mount().await;
    spinner.finish_and_clear();
    loaded.with_context(|| format!("Failed to load product '{slug}'"))?;

    let state = detail.state();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": state.product,
            "related": state.related,
        }));
        return Ok(());
    }

    let Some(product) = state.product else {
        return Ok(());
    };
    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &price_label(&product));
    ctx.output.kv(
        "image",
        &storefront.assets().image_url(ImageKind::Product, &product.image),
    );
    if let Some(ref description) = product.description {
        ctx.output.kv("description", description);
    }

    if !state.related.is_empty() {
        print_products("Related products", &state.related, ctx);
    }
    Ok(())
}

async fn banners(play: bool, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let slider = storefront.slider();
    slider.mount().await;

    let state = slider.state();
    if ctx.output.is_json() {
        ctx.output.json(&state.banners);
        return Ok(());
    }

    if state.banners.is_empty() {
        ctx.output.warn("No banners");
        return Ok(());
    }

    if !play {
        ctx.output.header("Banners");
        for banner in &state.banners {
            ctx.output
                .list_item(&storefront.assets().image_url(ImageKind::Banner, &banner.image));
        }
        return Ok(());
    }

    play_banners(&slider, storefront.slide_interval(), ctx).await
}

async fn play_banners(slider: &SliderScreen, period: std::time::Duration, ctx: &Context) -> Result<()> {
    ctx.output.info("Playing banners, Ctrl-C to stop");
    let show = |slider: &SliderScreen| {
        let state = slider.state();
        if let Some(banner) = state.banners.get(state.current) {
            ctx.output.list_item(&format!(
                "[{}/{}] {}",
                state.current + 1,
                state.banners.len(),
                banner.name.as_deref().unwrap_or(&banner.image)
            ));
        }
    };

    show(slider);
    let autoplay = slider.autoplay(period)?;
    let mut ticks = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticks.tick() => show(slider),
        }
    }

    slider.unmount();
    autoplay.await?;
    Ok(())
}

fn print_products(title: &str, products: &[Product], ctx: &Context) {
    ctx.output.header(title);
    if products.is_empty() {
        ctx.output.info("No products");
        return;
    }
    let widths = [36, 18, 6];
    ctx.output.table_row(&["NAME", "PRICE", "ID"], &widths);
    for product in products {
        ctx.output.table_row(
            &[&product.name, &price_label(product), &product.id.to_string()],
            &widths,
        );
    }
}

fn price_label(product: &Product) -> String {
    if product.is_on_sale() {
        format!("{} (was {})", product.effective_price().display(), product.price.display())
    } else {
        product.effective_price().display()
    }
}
