/// Admission type labels keyed by `admission_type_id`.
pub const ADMISSION_TYPE_LABELS: [(u32, &str); 9] = [
    (1, "Emergency"),
    (2, "Urgent"),
    (3, "Elective"),
    (4, "Newborn"),
    (5, "Not Available"),
    (6, "Other"),
    (7, "Trauma Center / Other"),
    (8, "Not Mapped"),
    (9, "Unknown"),
];

pub fn admission_type_label(id: u32) -> Option<&'static str> {
    ADMISSION_TYPE_LABELS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
}
