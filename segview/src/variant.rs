//! The access strategies being compared

use clap::ValueEnum;

/// One way of reaching the values of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, serde::Serialize)]
pub enum Variant {
    /// Index the offsets table and the values directly
    #[value(name = "direct")]
    #[serde(rename = "Buffer/Direct")]
    Direct,
    /// Borrowed [`RawView`](segview_core::RawView) cut from the buffer
    #[value(name = "raw-view")]
    #[serde(rename = "Buffer|RawView")]
    RawView,
    /// Native slice subview `&values[begin..end]`
    #[value(name = "slice")]
    #[serde(rename = "Buffer::slice")]
    Slice,
    /// Native checked subview `values.get(begin..end)`
    #[value(name = "slice-get")]
    #[serde(rename = "Buffer::get")]
    SliceGet,
    /// [`SharedView`](segview_core::SharedView) over the shared copy of the values
    #[value(name = "shared-view")]
    #[serde(rename = "SharedView")]
    SharedView,
    /// Borrowed view cut from the shared copy of the values
    #[value(name = "shared-raw-view")]
    #[serde(rename = "SharedArray|RawView")]
    SharedRawView,
}

impl Variant {
    /// Every variant, in run order
    pub const ALL: [Variant; 6] = [
        Variant::Direct,
        Variant::RawView,
        Variant::Slice,
        Variant::SliceGet,
        Variant::SharedView,
        Variant::SharedRawView,
    ];

    /// Display name used in status lines and the result table
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Direct => "Buffer/Direct",
            Variant::RawView => "Buffer|RawView",
            Variant::Slice => "Buffer::slice",
            Variant::SliceGet => "Buffer::get",
            Variant::SharedView => "SharedView",
            Variant::SharedRawView => "SharedArray|RawView",
        }
    }

    /// Whether the variant reads through the shared copy rather than the buffer
    pub const fn uses_shared_storage(self) -> bool {
        matches!(self, Variant::SharedView | Variant::SharedRawView)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
