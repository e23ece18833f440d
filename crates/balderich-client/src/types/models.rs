/*
[INPUT]:  API payload layouts documented per endpoint
[OUTPUT]: Typed Rust structs with lenient serde decoding
[POS]:    Data layer - resource payload definitions
[UPDATE]: When API payload schema changes or new endpoints are wrapped
*/

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ### Shared

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBrief {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
}

// ### User

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub intro: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub solves: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(deserialize_with = "null_as_default")]
    pub register_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_login_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: u64,
    pub tid: Option<u64>,
    pub team: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_vip: bool,
}

/// Daily solve counts from January 1st to today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivity {
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ends_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub count: Vec<(String, u64)>,
}

/// Solve timestamps for one problem category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveSeries {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub category: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unrated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub nums: u64,
}

/// `[solved, total]` for WEB, PWN, REVERSE, CRYPTO, MISC, OTHER
pub type RadarData = Vec<(u64, u64)>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlePage {
    #[serde(deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PicturebedUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub used_mem: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_mem: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PicturePage {
    #[serde(deserialize_with = "null_as_default")]
    pub pictures: Vec<Picture>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadedPicture {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

// ### Problem

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub level: f64,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemPage {
    #[serde(deserialize_with = "null_as_default")]
    pub problems: Vec<ProblemSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub solved: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub wa: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hint: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub level: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub annex: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub docker: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub info: SolveInfo,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetPage {
    #[serde(deserialize_with = "null_as_default")]
    pub sheets: Vec<SheetSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

/// `kind`: 0 past contest, 1 official pick, 2 user shared
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetProblem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub solved: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub level: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetProblemPage {
    #[serde(deserialize_with = "null_as_default")]
    pub problems: Vec<SheetProblem>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

// ### Contest

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ends_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_team: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestPage {
    #[serde(deserialize_with = "null_as_default")]
    pub contests: Vec<ContestSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(deserialize_with = "null_as_default")]
    pub top_score: i64,
    #[serde(alias = "descrease_score")]
    #[serde(deserialize_with = "null_as_default")]
    pub decrease_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ends_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_team: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub solved: String,
    #[serde(deserialize_with = "null_as_default")]
    pub solved_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
}

/// Scoreboard page; maps are keyed by problem id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankBoard {
    #[serde(deserialize_with = "null_as_default")]
    pub category: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub point: HashMap<String, i64>,
    /// `(pid, solves, title)`
    #[serde(deserialize_with = "null_as_default")]
    pub problems: Vec<(u64, u64, String)>,
    #[serde(deserialize_with = "null_as_default")]
    pub top3: HashMap<String, Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub solves: Vec<RankEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub team: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

// ### Team

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamLeader {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    pub user: Option<TeamLeader>,
    #[serde(deserialize_with = "null_as_default")]
    pub nums: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPage {
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Vec<TeamSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamNotice {
    #[serde(deserialize_with = "null_as_default")]
    pub notice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockIn {
    #[serde(deserialize_with = "null_as_default")]
    pub state: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub nums: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProblemSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub level: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub solves: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProblemPage {
    #[serde(deserialize_with = "null_as_default")]
    pub problems: Vec<TeamProblemSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

/// `role`: 0 member, 1 admin, 2 captain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub role: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMemberPage {
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<TeamMember>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamApplication {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub msg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamApplicationPage {
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<TeamApplication>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    #[serde(deserialize_with = "null_as_default")]
    pub now: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub problem: Quota,
    #[serde(deserialize_with = "null_as_default")]
    pub contest: Quota,
    #[serde(deserialize_with = "null_as_default")]
    pub memory: Quota,
    #[serde(deserialize_with = "null_as_default")]
    pub person: Quota,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub state: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyStatistics {
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sum_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub team_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub team_sum_score: i64,
}

/// Solve timestamps over the last three months, keyed by uid
pub type SolvesCurve = HashMap<String, Vec<i64>>;

/// Per-day statistics keyed by date
pub type StatisticsByDay = HashMap<String, DailyStatistics>;
