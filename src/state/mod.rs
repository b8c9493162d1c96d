pub mod care;
pub mod gesture;
pub mod lifecycle;
pub mod locale;
pub mod locations;
pub mod plants;
pub mod theme;
pub mod viewport;

pub use care::CareState;
pub use gesture::GestureSession;
pub use lifecycle::LightboxLifecycle;
pub use locale::Locale;
pub use locations::LocationsState;
pub use plants::PlantsState;
pub use theme::ThemePreference;
pub use viewport::{RenderedSize, ViewportState};
