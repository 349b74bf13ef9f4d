pub mod mipmap;
pub mod render;
pub mod text;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    Square,
    Round,
}

impl Variant {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Square => "ic_launcher.png",
            Self::Round => "ic_launcher_round.png",
        }
    }
}
