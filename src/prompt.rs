//! Instruction text sent alongside the source photo.
//!
//! Nothing in this crate can check the face in a generated image; the rules
//! written here are the only thing asking the model to keep it.

pub const DEFAULT_SCENE_DESCRIPTION: &str = "A natural, professionally shot portrait with creative lighting and a realistic, softly blurred background.";

pub const OUTPUT_ASPECT_RATIO: &str = "3:4";

/// Falls back to [`DEFAULT_SCENE_DESCRIPTION`] when the description is blank.
pub fn scene_or_default(scene_description: &str) -> &str {
    if scene_description.trim().is_empty() {
        DEFAULT_SCENE_DESCRIPTION
    } else {
        scene_description
    }
}

pub fn build_prompt(scene_description: &str, pose_instruction: &str) -> String {
    let scene = scene_or_default(scene_description);

    format!(
        r#"**MANDATORY RULE: The person's face in the output image MUST be identical to the face in the provided photo. Do not alter their facial features, structure, or identity in any way.**

Your task is to place the person from the photo into a new scene, with a new pose, while strictly preserving their facial identity. Follow these steps:

1.  **Analyze the Face:** First, carefully analyze the person's exact facial features from the provided image. This is your identity reference.
2.  **Create New Pose:** Re-create the person's body in a new pose described as: "{pose}".
3.  **Apply Original Face:** Using the identity reference from step 1, apply the **exact** original face to the newly posed body. It must be a perfect match.
4.  **Create New Scene:** Place this re-posed person into a new environment: "{scene}".
5.  **Final Polish:** Adjust lighting, shadows, and color grading to make the person look natural in the new scene. The final image must be photorealistic, cinematic, 4K quality, with a {ratio} portrait aspect ratio and soft background blur.

**ABSOLUTE FORBIDDEN ACTIONS:**
- Generating a new face that only *resembles* the original.
- Changing any facial features (eyes, nose, mouth, skin tone, etc.).
- Distorting the face or body proportions."#,
        pose = pose_instruction,
        scene = scene,
        ratio = OUTPUT_ASPECT_RATIO,
    )
}
