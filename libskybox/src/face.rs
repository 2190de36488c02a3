use crate::FACE_COUNT;

/// Face of the cubemap
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceName {
    Left,
    Front,
    Right,
    Back,
    Top,
    Bottom,
}

impl FaceName {
    /// Faces in layout order; region `i` always belongs to `ALL[i]`
    pub const ALL: [FaceName; FACE_COUNT] = [
        FaceName::Left,
        FaceName::Front,
        FaceName::Right,
        FaceName::Back,
        FaceName::Top,
        FaceName::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Front => "Front",
            Self::Right => "Right",
            Self::Back => "Back",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }

    /// Get the output file name of the face
    pub fn file_name(self) -> String {
        format!("{}.png", self.as_str())
    }

    /// Position of the face in layout order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
