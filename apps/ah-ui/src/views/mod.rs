pub mod credits_view;
pub mod explore_view;
pub mod params_view;
pub mod plot_view;
pub mod table_view;

pub use credits_view::CreditsView;
pub use explore_view::ExploreView;
pub use params_view::ParamsView;
pub use plot_view::PlotView;
pub use table_view::TableView;
