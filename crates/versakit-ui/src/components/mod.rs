//! Yew components.
//!
//! # Design
//! - Components only translate props into calls on the DOM-free types in [`crate::core`].
//! - Side effects on the document live in `dom` so that every component shares one
//!   implementation of scroll locking, focus handling, and frame scheduling.

pub mod alert;
pub mod button;
pub mod card;
pub mod code;
pub(crate) mod dom;
pub mod foundations;
pub mod modal;
pub mod progress;
pub mod spinner;

pub use alert::{Alert, AlertContent, AlertDescription, AlertIcon, AlertTitle};
pub use button::Button;
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use code::Code;
pub use progress::Progress;
pub use spinner::Spinner;
