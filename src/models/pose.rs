use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoseVariant {
    pub label: &'static str,
    pub instruction: &'static str,
}

/// The photoshoot. Its length is the fan-out width and its order is the
/// output order.
pub static POSE_CATALOG: [PoseVariant; 4] = [
    PoseVariant {
        label: "Confident Pose",
        instruction: "a confident pose, looking directly at the camera",
    },
    PoseVariant {
        label: "Candid Laugh",
        instruction: "a candid laughing pose, looking slightly away from the camera",
    },
    PoseVariant {
        label: "Thoughtful Profile",
        instruction: "a thoughtful three-quarters profile shot, with a soft expression",
    },
    PoseVariant {
        label: "Dynamic Action",
        instruction: "a dynamic action pose, as if captured mid-movement",
    },
];

pub fn catalog() -> &'static [PoseVariant] {
    &POSE_CATALOG
}

pub fn find_pose(label: &str) -> Option<&'static PoseVariant> {
    POSE_CATALOG.iter().find(|pose| pose.label == label)
}
