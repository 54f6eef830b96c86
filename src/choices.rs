//! Option catalogs and enumerated choice values for the Zawajuna flows
//!
//! Wire values match what the backend expects (`celibataire`,
//! `court_terme`, ...); display labels stay in French as the product
//! copy is French.

use serde::{Deserialize, Serialize};

/// Languages offered on the "informations détaillées" step.
pub const LANGUAGES: &[&str] = &[
	"Français",
	"Arabe",
	"Anglais",
	"Espagnol",
	"Italien",
	"Allemand",
	"Portugais",
	"Turc",
	"Berbère",
	"Wolof",
	"Autre",
];

/// Countries offered for origin, nationality and residence.
pub const COUNTRIES: &[&str] = &[
	"France",
	"Maroc",
	"Algérie",
	"Tunisie",
	"Égypte",
	"Arabie Saoudite",
	"Émirats Arabes Unis",
	"Qatar",
	"Koweït",
	"Jordanie",
	"Liban",
	"Syrie",
	"Turquie",
	"Malaisie",
	"Indonésie",
	"Pakistan",
	"Bangladesh",
	"Autre",
];

pub const ETHNICITIES: &[&str] = &[
	"Arabe",
	"Berbère",
	"Africain",
	"Européen",
	"Asiatique",
	"Mixed (métisse)",
	"Autre",
];

pub const BODY_TYPES: &[&str] = &["Mince", "Normal", "Athlétique", "Corpulent", "Autre"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Homme,
	Femme,
}

impl Gender {
	pub const ALL: [Gender; 2] = [Gender::Homme, Gender::Femme];

	pub fn as_str(&self) -> &'static str {
		match self {
			Gender::Homme => "homme",
			Gender::Femme => "femme",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
	Celibataire,
	Marie,
	Divorce,
	Veuf,
}

impl MaritalStatus {
	pub const ALL: [MaritalStatus; 4] = [
		MaritalStatus::Celibataire,
		MaritalStatus::Marie,
		MaritalStatus::Divorce,
		MaritalStatus::Veuf,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			MaritalStatus::Celibataire => "celibataire",
			MaritalStatus::Marie => "marie",
			MaritalStatus::Divorce => "divorce",
			MaritalStatus::Veuf => "veuf",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Religiosity {
	Debutant,
	Pratiquant,
	TresPratiquant,
}

impl Religiosity {
	pub const ALL: [Religiosity; 3] = [
		Religiosity::Debutant,
		Religiosity::Pratiquant,
		Religiosity::TresPratiquant,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Religiosity::Debutant => "debutant",
			Religiosity::Pratiquant => "pratiquant",
			Religiosity::TresPratiquant => "tres_pratiquant",
		}
	}
}

/// Answer to "suivez-vous le minhaj salafi ?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowsMinhaj {
	Oui,
	Non,
}

impl FollowsMinhaj {
	pub const ALL: [FollowsMinhaj; 2] = [FollowsMinhaj::Oui, FollowsMinhaj::Non];

	pub fn as_str(&self) -> &'static str {
		match self {
			FollowsMinhaj::Oui => "oui",
			FollowsMinhaj::Non => "non",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HijraProject {
	CourtTerme,
	MoyenTerme,
	LongTerme,
	Aucun,
}

impl HijraProject {
	pub const ALL: [HijraProject; 4] = [
		HijraProject::CourtTerme,
		HijraProject::MoyenTerme,
		HijraProject::LongTerme,
		HijraProject::Aucun,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			HijraProject::CourtTerme => "court_terme",
			HijraProject::MoyenTerme => "moyen_terme",
			HijraProject::LongTerme => "long_terme",
			HijraProject::Aucun => "aucun",
		}
	}
}
