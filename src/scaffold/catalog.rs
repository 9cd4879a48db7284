//! The Cosmic component catalog.
//!
//! Compiled-in reference data: the set of reusable library components a
//! generated scaffold may import. Order is significant and stable, both
//! for reproducible output and for callers that display the listing.

pub const COSMIC_COMPONENTS: &[&str] = &[
    "Avatar",
    "AvatarGroup",
    "Badge",
    "Button",
    "ImageUploader",
    "Drawer",
    "Dialog",
    "Empty",
    "Fold",
    "FoldSwitch",
    "Icon",
    "Image",
    "Input",
    "Loading",
    "MoreLink",
    "Popover",
    "Rank",
    "RichVideoPlayer",
    "Score",
    "Swiper",
    "SwiperItem",
    "Switcher",
    "Tag",
    "Textarea",
    "Toast",
    "Tabs",
    "Tab",
    "TabPane",
    "AudioPlayer",
    "Tooltip",
    "Vote",
    "Checkbox",
    "CheckboxGroup",
    "Radio",
    "RadioGroup",
    "Select",
    "Cascader",
    "Table",
    "Price",
    "Accordion",
    "AccordionPanel",
    "Calendar",
    "DatePicker",
    "Timeline",
    "TimelineItem",
    "CitySelector",
    "Pagination",
    "TimePicker",
    "PickerViewColumn",
    "PickerView",
    "DateTimePicker",
];

/// Snapshot of the catalog in its declared order.
pub fn list() -> Vec<String> {
    COSMIC_COMPONENTS.iter().map(|s| s.to_string()).collect()
}
