mod common;
mod recommendation;
mod reporting;
mod routing;
mod service;
