pub struct ComedianProfileUpdate {
    pub stage_name: String,
    pub bio: String,
    pub experience_years: Option<i64>,
}
