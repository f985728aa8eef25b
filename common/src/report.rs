/// Sink for the line-oriented narration of what a component did.
pub trait Report {
    fn line(&self, text: &str);
}

/// Writes every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Report for Console {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}
