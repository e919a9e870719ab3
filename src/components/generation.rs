//! Simulated synthetic-dataset generation.
//!
//! Nothing is generated; a run walks idle → generating → completed → idle on
//! fixed timers driven by the page.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationStatus {
	#[default]
	Idle,
	Generating,
	Completed,
}

impl GenerationStatus {
	/// Starting is only possible from idle.
	pub fn start(self) -> Option<Self> {
		match self {
			GenerationStatus::Idle => Some(GenerationStatus::Generating),
			_ => None,
		}
	}

	/// Next state once this one's timer fires.
	pub fn advance(self) -> Self {
		match self {
			GenerationStatus::Generating => GenerationStatus::Completed,
			GenerationStatus::Completed | GenerationStatus::Idle => GenerationStatus::Idle,
		}
	}

	/// How long the state lasts before advancing; idle is stable.
	pub fn duration(self) -> Option<Duration> {
		match self {
			GenerationStatus::Idle => None,
			GenerationStatus::Generating => Some(Duration::from_millis(3000)),
			GenerationStatus::Completed => Some(Duration::from_millis(2000)),
		}
	}

	pub fn button_label(self) -> &'static str {
		match self {
			GenerationStatus::Idle => "Generate Dataset",
			GenerationStatus::Generating => "Generating...",
			GenerationStatus::Completed => "Completed!",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataType {
	#[default]
	Image,
	Text,
	Audio,
	Video,
}

impl DataType {
	pub const ALL: [DataType; 4] = [DataType::Image, DataType::Text, DataType::Audio, DataType::Video];

	pub fn name(self) -> &'static str {
		match self {
			DataType::Image => "Images",
			DataType::Text => "Text",
			DataType::Audio => "Audio",
			DataType::Video => "Video",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quality {
	Standard,
	#[default]
	High,
	Ultra,
}

impl Quality {
	pub const ALL: [Quality; 3] = [Quality::Standard, Quality::High, Quality::Ultra];

	pub fn as_str(self) -> &'static str {
		match self {
			Quality::Standard => "standard",
			Quality::High => "high",
			Quality::Ultra => "ultra",
		}
	}
}

/// Augmentations offered by the form and whether each is on by default.
pub const AUGMENTATIONS: &[(&str, bool)] = &[
	("Rotation", true),
	("Flip & Mirror", true),
	("Color Adjustment", true),
	("Crop & Scale", true),
	("Noise Injection", false),
	("Blur & Sharpen", false),
];

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
	pub data_type: DataType,
	pub samples: u32,
	pub augmentation: bool,
	/// Fraction of samples held out for validation, in [0, 1].
	pub validation_split: f64,
	pub quality: Quality,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			data_type: DataType::default(),
			samples: 1000,
			augmentation: true,
			validation_split: 0.2,
			quality: Quality::default(),
		}
	}
}

impl GenerationConfig {
	pub fn set_validation_split(&mut self, split: f64) {
		if split.is_finite() {
			self.validation_split = split.clamp(0.0, 1.0);
		}
	}

	pub fn validation_percent(&self) -> String {
		format!("{:.0}%", self.validation_split * 100.0)
	}
}
