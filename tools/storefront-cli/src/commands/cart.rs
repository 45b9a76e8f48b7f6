//! Session cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use storefront_app::screens::CartScreen;
use storefront_app::AppError;
use storefront_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(&cart_screen(ctx)?, ctx),
        CartCommand::Add { slug, qty } => add(&slug, &qty, ctx).await,
        CartCommand::Remove { id } => {
            let cart = cart_screen(ctx)?;
            if !cart.remove(ProductId::new(id)).map_err(user_error)? {
                ctx.output.warn(&format!("No line for product {id}"));
            }
            show(&cart, ctx)
        }
        CartCommand::Inc { id } => {
            let cart = cart_screen(ctx)?;
            if !cart.increase(ProductId::new(id)).map_err(user_error)? {
                ctx.output.warn(&format!("No line for product {id}"));
            }
            show(&cart, ctx)
        }
        CartCommand::Dec { id } => {
            let cart = cart_screen(ctx)?;
            if !cart.decrease(ProductId::new(id)).map_err(user_error)? {
                ctx.output
                    .warn(&format!("Product {id} is not in the cart or already at 1"));
            }
            show(&cart, ctx)
        }
        CartCommand::Clear { yes } => clear(yes, ctx),
        CartCommand::Order { yes } => order(yes, ctx),
    }
}

fn cart_screen(ctx: &Context) -> Result<CartScreen> {
    let cart = CartScreen::new(ctx.cart_repository()?);
    cart.mount();
    Ok(cart)
}

fn user_error(e: AppError) -> anyhow::Error {
    tracing::debug!(error = %e, "cart action failed");
    anyhow::anyhow!(e.user_message())
}

fn show(cart: &CartScreen, ctx: &Context) -> Result<()> {
    let summary = cart.summary().map_err(user_error)?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Cart");
    if summary.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [30, 6, 5, 16, 16];
    ctx.output
        .table_row(&["NAME", "ID", "QTY", "PRICE", "LINE TOTAL"], &widths);
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                &line.item.name,
                &line.item.id.to_string(),
                &line.item.qty.to_string(),
                &line.item.price.display(),
                &line.line_total.display(),
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output.kv("items", &summary.item_count.to_string());
    ctx.output.kv("total", &summary.total.display());
    Ok(())
}

async fn add(slug: &str, qty: &str, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let detail = storefront.product_detail(slug);

    let spinner = ctx.output.spinner("Loading product...");
    let loaded = detail.mount().await;
    spinner.finish_and_clear();
    loaded.with_context(|| format!("Failed to load product '{slug}'"))?;

    detail.set_quantity(qty);
    let line = detail.add_to_cart().map_err(user_error)?;

    if ctx.output.is_json() {
        ctx.output.json(&line);
        return Ok(());
    }
    ctx.output.success(&format!(
        "Added {} x {} ({} in cart)",
        qty.trim(),
        line.name,
        line.qty
    ));
    Ok(())
}

fn confirm(prompt: &str, yes: bool, ctx: &Context) -> Result<bool> {
    if yes || ctx.output.is_json() {
        return Ok(true);
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let cart = cart_screen(ctx)?;
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }
    if !confirm("Remove every item from the cart?", yes, ctx)? {
        ctx.output.warn("Cancelled");
        return Ok(());
    }

    cart.clear().map_err(user_error)?;
    ctx.output.success("Cart cleared");
    Ok(())
}

fn order(yes: bool, ctx: &Context) -> Result<()> {
    let cart = cart_screen(ctx)?;
    if !cart.is_empty() {
        let total = cart.summary().map_err(user_error)?.total;
        if !confirm(&format!("Place order for {}?", total.display()), yes, ctx)? {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    let order = cart.place_order().map_err(user_error)?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output.success(&format!(
        "Order placed at {}",
        order.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    ctx.output.kv("items", &order.item_count.to_string());
    ctx.output.kv("total", &order.total.display());
    Ok(())
}
