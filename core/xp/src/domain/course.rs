//! コースツリーとスキル ID の抽出
//!
//! コースは section → unit → level の入れ子。level はスキル ID を
//! `pathLevelMetadata.skillId` か `pathLevelClientData.skillId` のどちらかに持つ。
//! どの階層のフィールドが欠けていても（null を含む）「その枝には無い」として扱う。

use serde::{Deserialize, Deserializer, Serialize};

/// スキル ID（不透明な文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(String);

impl SkillId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for SkillId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// null / 欠落を空 Vec として読む
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(d).map(Option::unwrap_or_default)
}

/// コース全体（`currentCourse`）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseTree {
    #[serde(rename = "pathSectioned", default, deserialize_with = "null_as_empty")]
    pub sections: Vec<CourseSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseSection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub units: Vec<CourseUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseUnit {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub levels: Vec<CourseLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLevel {
    #[serde(default)]
    pub path_level_metadata: Option<LevelSkillRef>,
    #[serde(default)]
    pub path_level_client_data: Option<LevelSkillRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSkillRef {
    #[serde(default)]
    pub skill_id: Option<String>,
}

impl CourseLevel {
    /// metadata → client data の順に、空でないスキル ID を返す
    pub fn skill_id(&self) -> Option<SkillId> {
        [&self.path_level_metadata, &self.path_level_client_data]
            .into_iter()
            .flatten()
            .filter_map(|r| r.skill_id.as_deref())
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(SkillId::new)
    }
}

impl CourseTree {
    /// 深さ優先（section → unit → level の並び順）で最初のスキル ID を返す
    pub fn first_skill_id(&self) -> Option<SkillId> {
        self.sections
            .iter()
            .flat_map(|s| &s.units)
            .flat_map(|u| &u.levels)
            .find_map(CourseLevel::skill_id)
    }
}

/// ツリーが無い場合も含めてスキル ID を抽出する
pub fn extract_skill_id(tree: Option<&CourseTree>) -> Option<SkillId> {
    tree.and_then(CourseTree::first_skill_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(v: serde_json::Value) -> CourseTree {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_absent_tree_has_no_skill() {
        assert_eq!(extract_skill_id(None), None);
        assert_eq!(extract_skill_id(Some(&CourseTree::default())), None);
    }

    #[test]
    fn test_levels_without_skill_fields() {
        let t = tree(json!({
            "pathSectioned": [
                {"units": [{"levels": [{}, {"pathLevelMetadata": {}}, {"pathLevelClientData": {"skillId": null}}]}]},
                {"units": null},
                {},
                {"units": [{"levels": null}, {}]}
            ]
        }));
        assert_eq!(t.first_skill_id(), None);
    }

    #[test]
    fn test_null_sections_parse_as_empty() {
        let t = tree(json!({"pathSectioned": null}));
        assert!(t.sections.is_empty());
        let t = tree(json!({}));
        assert!(t.sections.is_empty());
    }

    #[test]
    fn test_first_match_in_depth_first_order() {
        let t = tree(json!({
            "pathSectioned": [
                {"units": [
                    {"levels": [{}, {"pathLevelClientData": {"skillId": "s0-u0-l1"}}]},
                    {"levels": [{"pathLevelMetadata": {"skillId": "s0-u1-l0"}}]}
                ]},
                {"units": [{"levels": [{"pathLevelMetadata": {"skillId": "s1-u0-l0"}}]}]}
            ]
        }));
        assert_eq!(t.first_skill_id(), Some(SkillId::new("s0-u0-l1")));
    }

    #[test]
    fn test_later_section_found_when_earlier_empty() {
        let t = tree(json!({
            "pathSectioned": [
                {"units": [{"levels": [{"pathLevelMetadata": {"skillId": ""}}]}]},
                {"units": [{"levels": [{}]}, {"levels": [{}, {"pathLevelMetadata": {"skillId": "deep"}}]}]}
            ]
        }));
        assert_eq!(extract_skill_id(Some(&t)), Some(SkillId::new("deep")));
    }

    #[test]
    fn test_metadata_preferred_over_client_data() {
        let level: CourseLevel = serde_json::from_value(json!({
            "pathLevelMetadata": {"skillId": "meta"},
            "pathLevelClientData": {"skillId": "client"}
        }))
        .unwrap();
        assert_eq!(level.skill_id(), Some(SkillId::new("meta")));
    }

    #[test]
    fn test_client_data_used_when_metadata_blank() {
        let level: CourseLevel = serde_json::from_value(json!({
            "pathLevelMetadata": {"skillId": "  "},
            "pathLevelClientData": {"skillId": "client"}
        }))
        .unwrap();
        assert_eq!(level.skill_id(), Some(SkillId::new("client")));
    }
}
