//! Screens of the storefront.
//!
//! Each screen owns its state behind a lock and is cheap to clone. Screens
//! that load data expose `mount`/`unmount`; results arriving after unmount
//! are dropped.

mod cart;
mod home;
mod login;
mod product_detail;
mod register;
mod slider;

pub use cart::CartScreen;
pub use home::{HomeScreen, HomeState};
pub use login::LoginScreen;
pub use product_detail::{ProductDetailScreen, ProductDetailState};
pub use register::{RegisterForm, RegisterScreen};
pub use slider::{SliderScreen, SliderState};
