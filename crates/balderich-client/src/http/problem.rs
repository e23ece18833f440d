/*
[INPUT]:  Problem / problem sheet identifiers and paging parameters
[OUTPUT]: Problem listings, problem details, sheet listings and details
[POS]:    HTTP layer - problem and problem sheet endpoints
[UPDATE]: When adding new problem endpoints or changing response format
*/

use crate::http::{NssClient, Result};
use crate::types::{ProblemDetail, ProblemPage, SheetDetail, SheetPage, SheetProblemPage};

impl NssClient {
    /// GET problem/list/{page}/{size}/
    pub async fn get_problem_list(&self, page: u32, size: u32) -> Result<ProblemPage> {
        self.get(&format!("problem/list/{page}/{size}/")).await
    }

    /// GET problem/{pid}/info/
    pub async fn get_problem_info(&self, pid: u64) -> Result<ProblemDetail> {
        self.get(&format!("problem/{pid}/info/")).await
    }

    /// GET problem/sheet/list/{page}/{size}/
    pub async fn get_problem_sheet_list(&self, page: u32, size: u32) -> Result<SheetPage> {
        self.get(&format!("problem/sheet/list/{page}/{size}/")).await
    }

    /// GET problem/sheet/{psid}/info/
    pub async fn get_problem_sheet_info(&self, psid: u64) -> Result<SheetDetail> {
        self.get(&format!("problem/sheet/{psid}/info/")).await
    }

    /// Problems contained in a sheet
    ///
    /// GET problem/sheet/{psid}/list/{page}/{size}/
    pub async fn get_problem_sheet_problem_list(
        &self,
        psid: u64,
        page: u32,
        size: u32,
    ) -> Result<SheetProblemPage> {
        self.get(&format!("problem/sheet/{psid}/list/{page}/{size}/"))
            .await
    }
}
