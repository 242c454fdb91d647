#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub description: String,
    pub image: Option<String>,
}

// the writable part of a cat; create and update both take the whole set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatFields {
    pub name: String,
    pub tag: String,
    pub description: String,
    pub image: Option<String>,
}

