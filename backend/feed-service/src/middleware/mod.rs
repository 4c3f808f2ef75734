pub mod probe_filter;

pub use probe_filter::ProbeFilter;
