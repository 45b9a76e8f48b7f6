//! Storefront wiring: the shared services every screen is built from.

use std::sync::Arc;
use std::time::Duration;

use storefront_commerce::cart::CartRepository;
use storefront_commerce::catalog::AssetUrls;
use storefront_data::{AccountClient, CatalogClient, FetchClient};

use crate::navigation::Navigator;
use crate::screens::{
    CartScreen, HomeScreen, LoginScreen, ProductDetailScreen, RegisterScreen, SliderScreen,
};

/// Cart persistence shared between the product page and the cart page.
pub type SharedCartRepository = Arc<dyn CartRepository>;

/// Default time between slider advances.
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_secs(3);

/// Services shared by all screens.
///
/// # Example
///
/// ```rust,ignore
/// let storefront = Storefront::new(client, cart_repository, navigator)
///     .with_assets(AssetUrls::new("http://localhost:8000"));
///
/// let home = storefront.home();
/// home.mount().await;
/// ```
#[derive(Clone)]
pub struct Storefront {
    catalog: CatalogClient,
    accounts: AccountClient,
    cart: SharedCartRepository,
    navigator: Arc<dyn Navigator>,
    assets: AssetUrls,
    slide_interval: Duration,
}

impl Storefront {
    pub fn new(
        client: FetchClient,
        cart: SharedCartRepository,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            catalog: CatalogClient::new(client.clone()),
            accounts: AccountClient::new(client),
            cart,
            navigator,
            assets: AssetUrls::default(),
            slide_interval: DEFAULT_SLIDE_INTERVAL,
        }
    }

    /// Resolve image filenames against `assets`.
    pub fn with_assets(mut self, assets: AssetUrls) -> Self {
        self.assets = assets;
        self
    }

    /// Set the slider autoplay period.
    pub fn with_slide_interval(mut self, interval: Duration) -> Self {
        self.slide_interval = interval;
        self
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    pub fn accounts(&self) -> &AccountClient {
        &self.accounts
    }

    pub fn cart_repository(&self) -> &SharedCartRepository {
        &self.cart
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn assets(&self) -> &AssetUrls {
        &self.assets
    }

    pub fn slide_interval(&self) -> Duration {
        self.slide_interval
    }

    pub fn home(&self) -> HomeScreen {
        HomeScreen::new(self.catalog.clone(), self.navigator.clone())
    }

    pub fn product_detail(&self, slug: impl Into<String>) -> ProductDetailScreen {
        ProductDetailScreen::new(self.catalog.clone(), self.cart.clone(), slug)
    }

    pub fn cart(&self) -> CartScreen {
        CartScreen::new(self.cart.clone())
    }

    pub fn slider(&self) -> SliderScreen {
        SliderScreen::new(self.catalog.clone())
    }

    pub fn login(&self) -> LoginScreen {
        LoginScreen::new(self.accounts.clone(), self.navigator.clone())
    }

    pub fn register(&self) -> RegisterScreen {
        RegisterScreen::new(self.accounts.clone(), self.navigator.clone())
    }
}
