//! The fixed coaching instruction sent with every upload.

/// Instruction forwarded verbatim alongside each video. The per-shot JSON
/// shape it requests is a contract between prompt and model only; replies
/// are returned to the caller as opaque text and never parsed locally.
pub const COACHING_PROMPT: &str = r#"
You are a professional badminton coach and computer vision expert.

First, confirm if this video shows badminton players executing shots in a rally or drill.
If not, respond clearly: "Please upload a valid badminton video."

If it is badminton, perform a detailed frame-by-frame analysis using advanced badminton-specific terminology. For each shot, provide:

{
  "shot_type": "[e.g. smash, clear, drop, net shot, drive, lift, etc.]",
  "shuttle_speed_estimate_kmh": [approximate speed in km/h],
  "contact_point_on_racket": "[e.g. sweet spot, frame, off-center, top of strings]",
  "player_posture": "[describe stance – e.g. ready stance, crouch, off-balance]",
  "balance_after_shot": "[e.g. recovered well, off-balance, slow recovery]",
  "shot_quality": "[e.g. deceptive, weak, tight to net, attacking clear]",
  "improvement_suggestions": [
    "[Give coaching tips on technique, footwork, recovery, or positioning using terminology familiar to trained badminton players/coaches.]"
  ]
}

Repeat this analysis sequentially for each shot shown in the video. Assume Player 1 is on the near side, and Player 2 is on the far side unless visually labeled.

Conclude with general improvement suggestions per player.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_asks_for_validity_check_first() {
        assert!(COACHING_PROMPT.contains("Please upload a valid badminton video"));
    }

    #[test]
    fn prompt_requests_per_shot_fields() {
        for field in [
            "shot_type",
            "shuttle_speed_estimate_kmh",
            "contact_point_on_racket",
            "player_posture",
            "balance_after_shot",
            "shot_quality",
            "improvement_suggestions",
        ] {
            assert!(COACHING_PROMPT.contains(field), "missing field {field}");
        }
    }
}
