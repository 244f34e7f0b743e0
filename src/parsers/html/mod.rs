mod parser;

pub use parser::HtmlParser;
