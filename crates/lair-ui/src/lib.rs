//! # Presentation Layer
//!
//! Headless dragon create/view component. Rendering produces HTML text;
//! submitting the form stores a dragon through the repository registered in
//! the injector under `dragonRepository`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`component`] | `DragonComponent` facade |
//! | [`view`] | Handlebars rendering of form and detail |
//! | [`form`] | Raw form values and parsing |
//! | [`listeners`] | Submit and show handlers |

pub mod component;
pub mod form;
pub mod listeners;
pub mod view;

pub use component::DragonComponent;
pub use form::DragonFormData;
pub use listeners::DragonFormListener;
pub use view::DragonView;
