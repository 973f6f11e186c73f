pub mod finder;
pub mod result_view;

pub use finder::FinderScreen;
pub use result_view::ResultView;
