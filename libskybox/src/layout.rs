use crate::converter;
use crate::error::LayoutError;
use crate::face::FaceName;
use crate::{FACE_COUNT, TEMPLATE_COLUMNS, TEMPLATE_ROWS};

/// Cell of the cross template (in faces, not pixels)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub left: u32,
    pub top: u32,
}

const fn cell(left: u32, top: u32) -> GridPosition {
    GridPosition { left, top }
}

/// Pixel rectangle of one face inside the source texture
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Check that the region lies inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.left) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.top) + u64::from(self.height) <= u64::from(height)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.left, self.top
        )
    }
}

/// Supported cross arrangements of the skybox texture
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceLayout {
    /// Top and bottom faces flank the front face
    TopFrontBottom,
    /// Top and bottom faces flank the right face
    TopRightBottom,
}

pub(crate) struct LayoutEntry {
    pub(crate) layout: FaceLayout,
    name: &'static str,
    description: &'static str,
    grid: [GridPosition; FACE_COUNT],
}

/// Indexed by `FaceLayout as usize`; grid positions are in `FaceName::ALL` order
pub(crate) static LAYOUT_TABLE: [LayoutEntry; 2] = [
    LayoutEntry {
        layout: FaceLayout::TopFrontBottom,
        name: "top-front-bottom",
        description: "top and bottom faces above and below the front face",
        grid: [
            cell(0, 1),
            cell(1, 1),
            cell(2, 1),
            cell(3, 1),
            cell(1, 0),
            cell(1, 2),
        ],
    },
    LayoutEntry {
        layout: FaceLayout::TopRightBottom,
        name: "top-right-bottom",
        description: "top and bottom faces above and below the right face",
        grid: [
            cell(0, 1),
            cell(1, 1),
            cell(2, 1),
            cell(3, 1),
            cell(2, 0),
            cell(2, 2),
        ],
    },
];

impl FaceLayout {
    pub const ALL: [FaceLayout; 2] = [FaceLayout::TopFrontBottom, FaceLayout::TopRightBottom];

    fn entry(self) -> &'static LayoutEntry {
        &LAYOUT_TABLE[self as usize]
    }

    /// Get the identifier used on the command line
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Get the grid positions of the faces in `FaceName::ALL` order
    pub fn grid(self) -> &'static [GridPosition; FACE_COUNT] {
        &self.entry().grid
    }

    /// Comma separated list of the supported layout names
    pub fn supported_names() -> String {
        LAYOUT_TABLE
            .iter()
            .map(|entry| entry.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Expected size of the whole texture for the given face size
    pub fn template_size(self, face_size: u32) -> Result<(u32, u32), LayoutError> {
        Ok((
            converter::scale_u32(TEMPLATE_COLUMNS, face_size)?,
            converter::scale_u32(TEMPLATE_ROWS, face_size)?,
        ))
    }

    /// Render the cross as a text grid
    pub fn diagram(self) -> String {
        let grid = self.grid();
        let mut lines = Vec::with_capacity(TEMPLATE_ROWS as usize);

        for row in 0..TEMPLATE_ROWS {
            let mut line = String::new();

            for column in 0..TEMPLATE_COLUMNS {
                let face = grid
                    .iter()
                    .position(|position| *position == cell(column, row))
                    .map(|index| FaceName::ALL[index]);

                match face {
                    Some(face) => line.push_str(&format!("[{:^6}]", face.as_str())),
                    None => line.push_str("        "),
                }
            }

            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl std::fmt::Display for FaceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FaceLayout {
    type Err = LayoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        LAYOUT_TABLE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(value))
            .map(|entry| entry.layout)
            .ok_or_else(|| LayoutError::InvalidLayout {
                name: value.to_string(),
                supported: FaceLayout::supported_names(),
            })
    }
}

/// Resolve the pixel regions of all six faces in `FaceName::ALL` order
pub fn resolve_regions(
    face_size: u32,
    layout: FaceLayout,
) -> Result<[Region; FACE_COUNT], LayoutError> {
    if face_size == 0 {
        return Err(LayoutError::InvalidFaceSize);
    }

    let mut regions = [Region {
        left: 0,
        top: 0,
        width: face_size,
        height: face_size,
    }; FACE_COUNT];

    for (region, position) in regions.iter_mut().zip(layout.grid()) {
        region.left = converter::scale_u32(position.left, face_size)?;
        region.top = converter::scale_u32(position.top, face_size)?;
    }

    Ok(regions)
}

/// Resolve the regions of a layout given by its name
pub fn resolve_regions_by_name(
    face_size: u32,
    name: &str,
) -> Result<[Region; FACE_COUNT], LayoutError> {
    let layout: FaceLayout = name.parse()?;
    resolve_regions(face_size, layout)
}
