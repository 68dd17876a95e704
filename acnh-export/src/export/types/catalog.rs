//! The five exported categories
//!
//! Field order here is the field order in the output JSON objects.

use super::category::{ALL_TIME_COLUMNS, CategorySpec, FieldSpec, Hemisphere};
use super::extract::Extract;

const CRITTER_IMAGE_COLUMNS: &[&str] = &["Icon Image", "Critterpedia Image", "Furniture Image"];

pub const CATEGORIES: [CategorySpec; 5] = [FISH, INSECTS, SEA_CREATURES, FOSSILS, ARTWORK];

const FISH: CategorySpec = CategorySpec {
    sheet: "Fish",
    image_columns: CRITTER_IMAGE_COLUMNS,
    time_columns: &ALL_TIME_COLUMNS,
    clean_columns: &["Spawn Rates"],
    fields: &[
        FieldSpec { name: "id", extract: Extract::Int("#") },
        FieldSpec { name: "name", extract: Extract::Text("Name") },
        FieldSpec { name: "image", extract: Extract::TextOrNull("Icon Image") },
        FieldSpec { name: "critterpedia_image", extract: Extract::TextOrNull("Critterpedia Image") },
        FieldSpec { name: "furniture_image", extract: Extract::TextOrNull("Furniture Image") },
        FieldSpec { name: "sell", extract: Extract::Int("Sell") },
        FieldSpec { name: "location", extract: Extract::Text("Where/How") },
        FieldSpec { name: "shadow", extract: Extract::Text("Shadow") },
        FieldSpec { name: "difficulty", extract: Extract::Text("Catch Difficulty") },
        FieldSpec { name: "vision", extract: Extract::Text("Vision") },
        FieldSpec { name: "catches_required", extract: Extract::Int("Total Catches to Unlock") },
        FieldSpec { name: "spawn_rates", extract: Extract::Text("Spawn Rates") },
        FieldSpec { name: "size", extract: Extract::Text("Size") },
        FieldSpec { name: "description", extract: Extract::Text("Description") },
        FieldSpec { name: "internal_id", extract: Extract::Int("Internal ID") },
        FieldSpec { name: "nh", extract: Extract::Months(Hemisphere::North) },
        FieldSpec { name: "sh", extract: Extract::Months(Hemisphere::South) },
        FieldSpec { name: "time", extract: Extract::FirstTime },
    ],
};

const INSECTS: CategorySpec = CategorySpec {
    sheet: "Insects",
    image_columns: CRITTER_IMAGE_COLUMNS,
    time_columns: &ALL_TIME_COLUMNS,
    clean_columns: &["Spawn Rates"],
    fields: &[
        FieldSpec { name: "id", extract: Extract::Int("#") },
        FieldSpec { name: "name", extract: Extract::Text("Name") },
        FieldSpec { name: "image", extract: Extract::TextOrNull("Icon Image") },
        FieldSpec { name: "critterpedia_image", extract: Extract::TextOrNull("Critterpedia Image") },
        FieldSpec { name: "furniture_image", extract: Extract::TextOrNull("Furniture Image") },
        FieldSpec { name: "sell", extract: Extract::Int("Sell") },
        FieldSpec { name: "location", extract: Extract::Text("Where/How") },
        FieldSpec { name: "weather", extract: Extract::Text("Weather") },
        FieldSpec { name: "catches_required", extract: Extract::Int("Total Catches to Unlock") },
        FieldSpec { name: "spawn_rates", extract: Extract::Text("Spawn Rates") },
        FieldSpec { name: "size", extract: Extract::Text("Size") },
        FieldSpec { name: "description", extract: Extract::Text("Description") },
        FieldSpec { name: "internal_id", extract: Extract::Int("Internal ID") },
        FieldSpec { name: "nh", extract: Extract::Months(Hemisphere::North) },
        FieldSpec { name: "sh", extract: Extract::Months(Hemisphere::South) },
        FieldSpec { name: "time", extract: Extract::FirstTime },
    ],
};

const SEA_CREATURES: CategorySpec = CategorySpec {
    sheet: "Sea Creatures",
    image_columns: CRITTER_IMAGE_COLUMNS,
    time_columns: &ALL_TIME_COLUMNS,
    clean_columns: &["Spawn Rates"],
    fields: &[
        FieldSpec { name: "id", extract: Extract::Int("#") },
        FieldSpec { name: "name", extract: Extract::Text("Name") },
        FieldSpec { name: "image", extract: Extract::TextOrNull("Icon Image") },
        FieldSpec { name: "critterpedia_image", extract: Extract::TextOrNull("Critterpedia Image") },
        FieldSpec { name: "furniture_image", extract: Extract::TextOrNull("Furniture Image") },
        FieldSpec { name: "sell", extract: Extract::Int("Sell") },
        FieldSpec { name: "shadow", extract: Extract::Text("Shadow") },
        FieldSpec { name: "speed", extract: Extract::Text("Movement Speed") },
        FieldSpec { name: "catches_required", extract: Extract::Int("Total Catches to Unlock") },
        FieldSpec { name: "spawn_rates", extract: Extract::Text("Spawn Rates") },
        FieldSpec { name: "size", extract: Extract::Text("Size") },
        FieldSpec { name: "description", extract: Extract::Text("Description") },
        FieldSpec { name: "internal_id", extract: Extract::Int("Internal ID") },
        FieldSpec { name: "nh", extract: Extract::Months(Hemisphere::North) },
        FieldSpec { name: "sh", extract: Extract::Months(Hemisphere::South) },
        FieldSpec { name: "time", extract: Extract::FirstTime },
    ],
};

const FOSSILS: CategorySpec = CategorySpec {
    sheet: "Fossils",
    image_columns: &["Image"],
    time_columns: &[],
    clean_columns: &[],
    fields: &[
        FieldSpec { name: "name", extract: Extract::Text("Name") },
        FieldSpec { name: "image", extract: Extract::TextOrNull("Image") },
        FieldSpec { name: "sell", extract: Extract::Int("Sell") },
        FieldSpec { name: "group", extract: Extract::Text("Fossil Group") },
        FieldSpec { name: "size", extract: Extract::Text("Size") },
        FieldSpec { name: "room", extract: Extract::SecondWord("Museum") },
        FieldSpec { name: "description", extract: Extract::Text("Description") },
        FieldSpec { name: "internal_id", extract: Extract::Int("Internal ID") },
    ],
};

const ARTWORK: CategorySpec = CategorySpec {
    sheet: "Artwork",
    image_columns: &["Image", "High-Res Texture"],
    time_columns: &[],
    clean_columns: &[],
    fields: &[
        FieldSpec { name: "name", extract: Extract::Text("Name") },
        FieldSpec { name: "image", extract: Extract::TextOrNull("Image") },
        FieldSpec { name: "high_res", extract: Extract::TextOrNull("High-Res Texture") },
        FieldSpec { name: "genuine", extract: Extract::Equals("Genuine", "Yes") },
        FieldSpec { name: "category", extract: Extract::Text("Category") },
        FieldSpec { name: "buy", extract: Extract::Int("Buy") },
        FieldSpec { name: "sell", extract: Extract::IntOrNa("Sell") },
        FieldSpec { name: "size", extract: Extract::Text("Size") },
        FieldSpec { name: "title", extract: Extract::Text("Real Artwork Title") },
        FieldSpec { name: "artist", extract: Extract::Text("Artist") },
        FieldSpec { name: "description", extract: Extract::Text("Description") },
        FieldSpec { name: "internal_id", extract: Extract::Int("Internal ID") },
    ],
};
