// アイコンカタログ - アイコンデータファイルをカテゴリ毎に読み込む

use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::config::icons::WANTED_CATEGORIES;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// Token inserted into the message, e.g. `<TXC00000000001234>`
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCategory {
    pub name: String,
    pub items: Vec<IconEntry>,
}

/// Parse icon data.
///
/// A non-blank line that does not start with `<` opens a category. A line
/// `<code> label` adds an item to the open category. Only the wanted
/// categories are returned, in their fixed order, items sorted by label.
pub fn parse_icon_data(text: &str) -> AppResult<Vec<IconCategory>> {
    let item_line = Regex::new(r"^(<[^>]+>)\s*(.*)$")
        .map_err(|e| AppError::custom(format!("Failed to build icon line pattern: {e}")))?;

    let mut categories: HashMap<String, Vec<IconEntry>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !trimmed.starts_with('<') {
            // 同名カテゴリが再度現れた場合は作り直す
            categories.insert(trimmed.to_string(), Vec::new());
            current = Some(trimmed.to_string());
            continue;
        }

        let (Some(name), Some(captures)) = (&current, item_line.captures(trimmed)) else {
            debug!("skipping icon line outside of a category: {trimmed}");
            continue;
        };
        if let Some(items) = categories.get_mut(name) {
            items.push(IconEntry {
                code: captures[1].to_string(),
                label: captures[2].to_string(),
            });
        }
    }

    let result: Vec<IconCategory> = WANTED_CATEGORIES
        .iter()
        .filter_map(|&wanted| {
            categories.remove(wanted).map(|mut items| {
                items.sort_by(|a, b| {
                    a.label
                        .to_lowercase()
                        .cmp(&b.label.to_lowercase())
                        .then_with(|| a.label.cmp(&b.label))
                });
                IconCategory {
                    name: wanted.to_string(),
                    items,
                }
            })
        })
        .collect();

    Ok(result)
}

pub fn load_icon_data(path: &Path) -> AppResult<Vec<IconCategory>> {
    let text = std::fs::read_to_string(path)?;
    let categories = parse_icon_data(&text)?;
    info!(
        "loaded {} icon categories from {}",
        categories.len(),
        path.display()
    );
    Ok(categories)
}
