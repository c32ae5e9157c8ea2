use colored::{ColoredString, Colorize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    Good,
    Bad,
    Info,
}

impl Kind {
    pub fn marker(&self) -> ColoredString {
        match self {
            Kind::Good => "[+]".green(),
            Kind::Bad => "[-]".red(),
            Kind::Info => "[*]".blue(),
        }
    }
}

/// `message` behind the colored marker for `kind`, color reset right after the marker.
pub fn line(kind: Kind, message: &str) -> String {
    format!("{} {}", kind.marker(), message)
}

pub fn good(message: &str) {
    println!("{}", line(Kind::Good, message));
}

pub fn bad(message: &str) {
    println!("{}", line(Kind::Bad, message));
}

pub fn info(message: &str) {
    println!("{}", line(Kind::Info, message));
}
