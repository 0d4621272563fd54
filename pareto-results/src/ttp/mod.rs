//! Contains functionality to read travelling thief problem results and write their Pareto front.

mod reader;
pub use self::reader::{TtpResults, parse_ttp_results};

mod solutions;
pub use self::solutions::Solutions;

mod writer;
pub use self::writer::{format_points, write_text_front, write_text_fronts};
