use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }

    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }
}

/// A post that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// A stored post. `id` and `created` are assigned by the store on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: String,
}

#[derive(Debug, Serialize)]
pub struct BlogList {
    pub blogs: Vec<BlogPost>,
}

// ─── Request bodies ───

/// Every field is optional so that missing ones surface as validation
/// errors instead of a bare deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBlogPostReq {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl CreateBlogPostReq {
    /// Checks the required fields in declaration order and reports the first
    /// one that is missing or blank.
    pub fn validate(self) -> Result<NewBlogPost, &'static str> {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err("title"),
        };
        let content = match self.content {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err("content"),
        };
        let author = match self.author {
            Some(a) if !a.is_blank() => a,
            _ => return Err("author"),
        };
        Ok(NewBlogPost { title, content, author })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogPostReq {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl UpdateBlogPostReq {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    /// Applies the creation rules to the fields that are present: none of
    /// them may be blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err("title");
        }
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err("content");
        }
        if self.author.as_ref().is_some_and(Author::is_blank) {
            return Err("author");
        }
        Ok(())
    }
}
