pub mod community_forum;
pub mod price_visualization;
pub mod weather_advice;

pub use community_forum::CommunityForum;
pub use price_visualization::PriceVisualization;
pub use weather_advice::WeatherAdvice;
