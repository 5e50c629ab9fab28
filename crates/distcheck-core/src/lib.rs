mod descriptor;
mod layout;

pub use descriptor::DistributionDescriptor;
pub use layout::ProjectLayout;
