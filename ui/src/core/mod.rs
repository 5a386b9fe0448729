//! Framework-free core: page registry, path codec, navigation state, and the
//! SEO side channel. Nothing in here renders anything.

pub mod history;
pub mod nav;
pub mod page;
pub mod seo;
