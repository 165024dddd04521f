use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::post::{NewPost, Post};
use crate::domain::types::{CategoryName, PostId, TagName};
use crate::models::observation::NewDomainObservation as DbNewObservation;
use crate::models::post::{NewPost as DbNewPost, Post as DbPost, PostTag};
use crate::repository::{
    DieselRepository, PostReader, PostWriter, RecentPostsQuery, RepositoryError, RepositoryResult,
    SEARCH_RESULT_LIMIT, SearchQuery,
};

impl DieselRepository {
    /// Fetch tag rows for the given posts, keyed by post id.
    fn load_tags(
        conn: &mut DbConnection,
        ids: &[i32],
    ) -> QueryResult<HashMap<i32, Vec<String>>> {
        use crate::schema::post_tags;

        let rows = post_tags::table
            .filter(post_tags::post_id.eq_any(ids))
            .order(post_tags::tag.asc())
            .load::<PostTag>(conn)?;

        let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
        for row in rows {
            tags.entry(row.post_id).or_default().push(row.tag);
        }
        Ok(tags)
    }

    fn into_domain_posts(
        conn: &mut DbConnection,
        rows: Vec<DbPost>,
    ) -> RepositoryResult<Vec<Post>> {
        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut tags = Self::load_tags(conn, &ids)?;

        rows.into_iter()
            .map(|row| {
                let row_tags = tags.remove(&row.id).unwrap_or_default();
                row.into_domain(row_tags).map_err(Into::into)
            })
            .collect()
    }
}

impl PostReader for DieselRepository {
    fn search_posts(&self, query: SearchQuery) -> RepositoryResult<Vec<Post>> {
        use crate::schema::posts;

        let filter = query.compile()?;
        let mut conn = self.conn()?;

        let mut items = posts::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(category) = filter.category() {
            items = items.filter(posts::category.eq(category.to_owned()));
        }

        // Substring conditions run in-process against escaped patterns, so
        // the cap applies after filtering.
        let rows = items
            .order(posts::added_at.desc())
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .filter(|row| {
                filter.matches(&row.title, row.description.as_deref(), &row.url, &row.category)
            })
            .take(SEARCH_RESULT_LIMIT)
            .collect::<Vec<_>>();

        Self::into_domain_posts(&mut conn, rows)
    }

    fn list_recent_posts(&self, query: RecentPostsQuery) -> RepositoryResult<Vec<Post>> {
        use crate::schema::{post_tags, posts};

        let mut conn = self.conn()?;

        let mut items = posts::table
            .filter(posts::added_at.ge(query.window.since()))
            .filter(posts::added_at.le(query.window.until()))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = &query.category {
            items = items.filter(posts::category.eq(category.clone()));
        }

        if let Some(tag) = &query.tag {
            items = items.filter(
                posts::id.eq_any(
                    post_tags::table
                        .filter(post_tags::tag.eq(tag.clone()))
                        .select(post_tags::post_id),
                ),
            );
        }

        let rows = items
            .order(posts::added_at.desc())
            .load::<DbPost>(&mut conn)?;

        Self::into_domain_posts(&mut conn, rows)
    }

    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let row = posts::table
            .filter(posts::id.eq(id.get()))
            .first::<DbPost>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Self::into_domain_posts(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn distinct_categories(&self) -> RepositoryResult<Vec<CategoryName>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let categories = posts::table
            .select(posts::category)
            .distinct()
            .order(posts::category.asc())
            .load::<String>(&mut conn)?;

        categories
            .into_iter()
            .map(|category| CategoryName::new(category).map_err(Into::into))
            .collect()
    }

    fn distinct_tags(&self) -> RepositoryResult<Vec<TagName>> {
        use crate::schema::post_tags;

        let mut conn = self.conn()?;

        let tags = post_tags::table
            .select(post_tags::tag)
            .distinct()
            .order(post_tags::tag.asc())
            .load::<String>(&mut conn)?;

        tags.into_iter()
            .map(|tag| TagName::new(tag).map_err(Into::into))
            .collect()
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, post: NewPost) -> RepositoryResult<Post> {
        use crate::schema::{domain_observations, post_tags, posts};

        let observation = DbNewObservation {
            domain: post.url.host()?.into_inner(),
            category: post.category.as_str().to_owned(),
            added_at: post.added_at,
        };
        let tags: Vec<String> = post.tags.iter().map(|tag| tag.as_str().to_owned()).collect();
        let db_post: DbNewPost = post.into();
        let url = db_post.url.clone();

        let mut conn = self.conn()?;

        let row = conn
            .transaction::<DbPost, diesel::result::Error, _>(|conn| {
                let row: DbPost = diesel::insert_into(posts::table)
                    .values(&db_post)
                    .get_result(conn)?;

                let tag_rows: Vec<PostTag> = tags
                    .iter()
                    .map(|tag| PostTag {
                        post_id: row.id,
                        tag: tag.clone(),
                    })
                    .collect();
                diesel::insert_into(post_tags::table)
                    .values(&tag_rows)
                    .execute(conn)?;

                diesel::insert_into(domain_observations::table)
                    .values(&observation)
                    .execute(conn)?;

                Ok(row)
            })
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => RepositoryError::Conflict(format!("clip with url {url} already exists")),
                e => RepositoryError::Database(e),
            })?;

        row.into_domain(tags).map_err(Into::into)
    }
}
