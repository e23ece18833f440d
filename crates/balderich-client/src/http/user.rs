/*
[INPUT]:  User identifiers, paging parameters, picture bed uploads
[OUTPUT]: User profile, statistics, social lists and picture bed data
[POS]:    HTTP layer - user endpoints
[UPDATE]: When adding new user endpoints or changing response format
*/

use std::path::Path;

use crate::http::{BalderichError, FilePart, NssClient, RequestBody, Result};
use crate::types::{
    ArticlePage, PicturePage, PicturebedUsage, RadarData, RatingRecord, SolveSeries,
    UploadedPicture, UserActivity, UserBrief, UserInfo,
};

impl NssClient {
    /// Query a user's profile by username or uid
    ///
    /// GET user/{name}/info/
    ///
    /// `name` must be a single path segment; values that are empty or contain
    /// `/`, `?` or `#` fail with [`BalderichError::InvalidArgument`] before any
    /// request is sent.
    pub async fn get_user_info(&self, name: &str) -> Result<UserInfo> {
        let name = path_segment(name)?;
        self.get(&format!("user/{name}/info/")).await
    }

    /// Daily solve activity for the current year
    ///
    /// GET user/{uid}/statistics/active/
    pub async fn get_user_statistics_active(&self, uid: u64) -> Result<UserActivity> {
        self.get(&format!("user/{uid}/statistics/active/")).await
    }

    /// Solve timestamps grouped by category
    ///
    /// GET user/{uid}/statistics/solves/
    pub async fn get_user_statistics_solves(&self, uid: u64) -> Result<Vec<SolveSeries>> {
        self.get(&format!("user/{uid}/statistics/solves/")).await
    }

    /// Rating changes per rated contest
    ///
    /// GET user/{uid}/statistics/rating/
    pub async fn get_user_statistics_rating(&self, uid: u64) -> Result<Vec<RatingRecord>> {
        self.get(&format!("user/{uid}/statistics/rating/")).await
    }

    /// Ability radar: `[solved, total]` per direction
    ///
    /// GET user/{uid}/statistics/radar/
    pub async fn get_user_statistics_radar(&self, uid: u64) -> Result<RadarData> {
        self.get(&format!("user/{uid}/statistics/radar/")).await
    }

    /// GET user/{uid}/article/list/{page}/{size}/
    pub async fn get_user_article_list(&self, uid: u64, page: u32, size: u32) -> Result<ArticlePage> {
        self.get(&format!("user/{uid}/article/list/{page}/{size}/"))
            .await
    }

    /// GET user/{uid}/following/list/{page}/{size}/
    pub async fn get_user_following_list(
        &self,
        uid: u64,
        page: u32,
        size: u32,
    ) -> Result<Vec<UserBrief>> {
        self.get(&format!("user/{uid}/following/list/{page}/{size}/"))
            .await
    }

    /// GET user/{uid}/follower/list/{page}/{size}/
    pub async fn get_user_follower_list(
        &self,
        uid: u64,
        page: u32,
        size: u32,
    ) -> Result<Vec<UserBrief>> {
        self.get(&format!("user/{uid}/follower/list/{page}/{size}/"))
            .await
    }

    /// Picture bed storage usage of the calling user
    ///
    /// GET user/picturebed/used/
    pub async fn get_user_picturebed_used(&self) -> Result<PicturebedUsage> {
        self.get("user/picturebed/used/").await
    }

    /// GET user/picturebed/list/{page}/{size}/
    pub async fn get_user_picturebed_list(&self, page: u32, size: u32) -> Result<PicturePage> {
        self.get(&format!("user/picturebed/list/{page}/{size}/"))
            .await
    }

    /// Upload an image to the picture bed
    ///
    /// POST user/picturebed/upload/ (multipart field `image`)
    pub async fn post_user_picturebed_upload(
        &self,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<UploadedPicture> {
        let body = RequestBody::Multipart(vec![FilePart {
            field: "image".to_string(),
            filename: filename.to_string(),
            bytes: image,
        }]);
        self.post("user/picturebed/upload/", body).await
    }

    /// Upload an image file from disk to the picture bed
    pub async fn post_user_picturebed_upload_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<UploadedPicture> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                BalderichError::Config(format!("{} has no usable file name", path.display()))
            })?
            .to_string();
        let image = tokio::fs::read(path).await?;
        self.post_user_picturebed_upload(&filename, image).await
    }

    /// Download a picture bed image as raw bytes
    ///
    /// POST user/picturebed/{pid}/download/
    pub async fn post_user_picturebed_download(&self, pid: u64) -> Result<Vec<u8>> {
        self.post_bytes(&format!("user/picturebed/{pid}/download/"), RequestBody::Empty)
            .await
    }
}

/// Reject values that would change the route or the signed path
fn path_segment(value: &str) -> Result<&str> {
    if value.is_empty() || value.contains(['/', '?', '#']) {
        return Err(BalderichError::InvalidArgument(format!(
            "{value:?} is not a valid path segment"
        )));
    }
    Ok(value)
}
