/*
[INPUT]:  Team identifiers, paging parameters and member uid lists
[OUTPUT]: Team listings, team-scoped problems/contests, membership and analytics
[POS]:    HTTP layer - team endpoints (most require team membership)
[UPDATE]: When adding new team endpoints or changing response format
*/

use crate::http::{NssClient, RequestBody, Result};
use crate::types::{
    ClockIn, ContestDetail, ContestPage, ProblemDetail, RankBoard, SolvesCurve, StatisticsByDay,
    TeamApplicationPage, TeamMemberPage, TeamNotice, TeamPage, TeamProblemPage, TeamSummary,
    TeamUsage,
};

impl NssClient {
    /// GET team/list/{page}/{size}/
    pub async fn get_team_list(&self, page: u32, size: u32) -> Result<TeamPage> {
        self.get(&format!("team/list/{page}/{size}/")).await
    }

    /// GET team/{tid}/info/
    pub async fn get_team_info(&self, tid: u64) -> Result<TeamSummary> {
        self.get(&format!("team/{tid}/info/")).await
    }

    /// Notice board of the caller's team
    ///
    /// GET team/notice/
    pub async fn get_team_notice(&self) -> Result<TeamNotice> {
        self.get("team/notice/").await
    }

    /// Daily team check-in
    ///
    /// PUT team/clockin/
    pub async fn put_team_clockin(&self) -> Result<ClockIn> {
        self.put("team/clockin/", RequestBody::Empty).await
    }

    /// GET team/problem/list/{page}/{size}/
    pub async fn get_team_problem_list(&self, page: u32, size: u32) -> Result<TeamProblemPage> {
        self.get(&format!("team/problem/list/{page}/{size}/")).await
    }

    /// GET team/problem/{pid}/info/
    pub async fn get_team_problem_info(&self, pid: u64) -> Result<ProblemDetail> {
        self.get(&format!("team/problem/{pid}/info/")).await
    }

    /// GET team/contest/list/{page}/{size}/
    pub async fn get_team_contest_list(&self, page: u32, size: u32) -> Result<ContestPage> {
        self.get(&format!("team/contest/list/{page}/{size}/")).await
    }

    /// GET team/contest/{cid}/info/
    pub async fn get_team_contest_info(&self, cid: u64) -> Result<ContestDetail> {
        self.get(&format!("team/contest/{cid}/info/")).await
    }

    /// GET team/contest/{cid}/rank/list/{page}/{size}/
    pub async fn get_team_contest_rank_list(
        &self,
        cid: u64,
        page: u32,
        size: u32,
    ) -> Result<RankBoard> {
        self.get(&format!("team/contest/{cid}/rank/list/{page}/{size}/"))
            .await
    }

    /// GET team/user/list/{page}/{size}/
    pub async fn get_team_user_list(&self, page: u32, size: u32) -> Result<TeamMemberPage> {
        self.get(&format!("team/user/list/{page}/{size}/")).await
    }

    /// Pending join requests; admin role or above
    ///
    /// GET team/user/apply/list/{page}/{size}/
    pub async fn get_team_apply_list(&self, page: u32, size: u32) -> Result<TeamApplicationPage> {
        self.get(&format!("team/user/apply/list/{page}/{size}/"))
            .await
    }

    /// Quota usage; admin role or above
    ///
    /// GET team/analysis/use/
    pub async fn get_team_analysis_use(&self) -> Result<TeamUsage> {
        self.get("team/analysis/use/").await
    }

    /// Solve timestamps of the given members over the last three months
    ///
    /// POST team/analysis/solves/curve/
    pub async fn post_team_analysis_solves_curve(&self, uids: &[u64]) -> Result<SolvesCurve> {
        self.post("team/analysis/solves/curve/", uid_form(uids))
            .await
    }

    /// Per-day solve statistics of the given members
    ///
    /// POST team/statistics/day/
    pub async fn post_team_statistics_day(&self, uids: &[u64]) -> Result<StatisticsByDay> {
        self.post("team/statistics/day/", uid_form(uids)).await
    }
}

fn uid_form(uids: &[u64]) -> RequestBody {
    RequestBody::Form(
        uids.iter()
            .map(|uid| ("uids".to_string(), uid.to_string()))
            .collect(),
    )
}
