//! Users screen (admin and cashier only)

use shared::models::{Role, User};

use super::load_page;
use crate::access::UserCaps;
use crate::listing::{ListQuery, ListState};
use crate::{HttpClient, WorkshopApi};

const FETCH_FAILED: &str = "Failed to fetch users";

pub struct UsersScreen {
    pub caps: UserCaps,
    pub query: ListQuery,
    pub list: ListState<User>,
}

impl UsersScreen {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            caps: UserCaps::for_role(role),
            query: ListQuery::default(),
            list: ListState::new(),
        }
    }

    /// No request is made for roles that cannot see the screen
    pub async fn refresh<C: HttpClient>(&mut self, api: &WorkshopApi<C>) {
        if !self.caps.can_view {
            return;
        }
        load_page(&mut self.list, api.list_users(&self.query), FETCH_FAILED).await;
    }

    pub async fn search<C: HttpClient>(&mut self, api: &WorkshopApi<C>, text: &str) {
        self.query.set_search(text);
        self.refresh(api).await;
    }

    /// `None` shows every role
    pub async fn filter_role<C: HttpClient>(&mut self, api: &WorkshopApi<C>, role: Option<Role>) {
        self.query.set_filter("role", role.map(|r| r.as_str()).unwrap_or_default());
        self.refresh(api).await;
    }

    pub async fn go_to_page<C: HttpClient>(&mut self, api: &WorkshopApi<C>, page: u32) {
        self.query.go_to(page, self.list.total_pages());
        self.refresh(api).await;
    }
}
