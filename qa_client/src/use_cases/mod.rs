pub mod navigator;
pub mod pages;

#[cfg(test)]
pub(crate) mod test_support;

pub use navigator::{Deferred, Navigator};
pub use pages::{
    HomePage, IntakeForm, PageStatus, ResultsPage, UserAPage, UserBPage, ViewResultsPage,
};
