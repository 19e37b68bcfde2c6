//! Canned consultation dialogues and the picker that chooses among them.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

pub const CHEST_PAIN_VISIT: &str = "\
Doctor: Good morning, how are you feeling today?
Patient: I've been having some chest pain for the past few days. It's sharp and comes and goes.
Doctor: Can you describe the pain more? When does it occur?
Patient: It's worse when I take deep breaths or move around. Sometimes it wakes me up at night.
Doctor: Any shortness of breath or nausea?
Patient: No, but I feel tired all the time.
Doctor: Let me check your blood pressure and heart rate. BP is 140/90, heart rate is 88 and regular.
Doctor: I'm going to order an EKG and some blood work. For now, I'm prescribing nitroglycerin for the chest pain and lisinopril for your blood pressure.
Patient: What should I do if the pain gets worse?
Doctor: If the pain becomes severe or you have difficulty breathing, go to the emergency room immediately. Otherwise, follow up with me in two weeks.
Patient: Thank you, doctor.";

pub const HYPERTENSION_FOLLOW_UP: &str = "\
Doctor: Welcome back! How has your blood pressure been?
Patient: I've been checking it at home, and it's been running high, around 150/95.
Doctor: Are you taking your medication regularly?
Patient: I've been forgetting some doses. Work has been stressful lately.
Doctor: I understand. Let's increase your amlodipine to 10mg daily and add some lifestyle modifications.
Patient: What kind of modifications?
Doctor: Try to reduce sodium intake, exercise 30 minutes daily, and practice stress management techniques like meditation.
Patient: I'll try my best.
Doctor: I'm also going to order some blood work to check your kidney function and cholesterol levels.
Patient: When should I come back?
Doctor: Let's see you in 4 weeks to monitor your progress.";

pub const ANNUAL_PHYSICAL: &str = "\
Doctor: I see you're here for your annual physical. Any concerns today?
Patient: I feel pretty good overall, just want to make sure everything is okay.
Doctor: Great! Let me check your vitals. BP is 128/82, heart rate 72, weight is stable at 165 lbs.
Doctor: Your lab results look good overall. Cholesterol is slightly elevated at 220, but your HDL is good at 45.
Patient: Should I be worried about that?
Doctor: Not worried, but we should address it. I recommend starting a statin and improving your diet.
Patient: What kind of diet changes?
Doctor: More fruits, vegetables, and whole grains. Less processed foods and saturated fats.
Doctor: I'm prescribing atorvastatin 20mg daily. We'll recheck your cholesterol in 3 months.
Patient: Sounds good. When should I come back?
Doctor: Let's schedule your next physical in 6 months, but we can do a cholesterol check in 3 months.";

pub const MOCK_TRANSCRIPTS: [&str; 3] = [CHEST_PAIN_VISIT, HYPERTENSION_FOLLOW_UP, ANNUAL_PHYSICAL];

/// Uniform choice among [`MOCK_TRANSCRIPTS`].
///
/// This is the only nondeterministic step in the system; seed it to make
/// the choice reproducible.
pub struct TranscriptPicker {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl TranscriptPicker {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn pick(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        MOCK_TRANSCRIPTS[rng.gen_range(0..MOCK_TRANSCRIPTS.len())]
    }
}

impl Default for TranscriptPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for TranscriptPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptPicker").finish_non_exhaustive()
    }
}
