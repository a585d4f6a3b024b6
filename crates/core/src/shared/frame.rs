/// A single camera frame's luma plane: unsigned 8-bit samples in
/// row-major order.
///
/// Chroma never reaches the core; format conversion happens at the
/// capture boundary and the domain layer only sees luminance.
#[derive(Clone, Debug)]
pub struct Frame {
    luma: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl Frame {
    pub fn new(luma: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            luma.len(),
            (width as usize) * (height as usize),
            "luma length must equal width * height"
        );
        Self {
            luma,
            width,
            height,
            index,
        }
    }

    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
