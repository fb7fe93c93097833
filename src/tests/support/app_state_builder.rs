use actix_web::web;
use std::sync::Arc;

use crate::modules::portfolio::application::use_cases::add_item::IAddItemUseCase;
use crate::modules::portfolio::application::use_cases::create_portfolio::ICreatePortfolioUseCase;
use crate::modules::portfolio::application::use_cases::delete_item::IDeleteItemUseCase;
use crate::modules::portfolio::application::use_cases::delete_portfolio::IDeletePortfolioUseCase;
use crate::modules::portfolio::application::use_cases::exists_portfolio::IExistsPortfolioUseCase;
use crate::modules::portfolio::application::use_cases::get_portfolio::IGetPortfolioUseCase;
use crate::modules::portfolio::application::use_cases::reorder_items::IReorderItemsUseCase;
use crate::modules::portfolio::application::use_cases::update_basic_info::IUpdateBasicInfoUseCase;
use crate::modules::portfolio::application::use_cases::update_item::IUpdateItemUseCase;
use crate::modules::search::application::use_cases::search_candidates::ISearchCandidatesUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    create_portfolio: Arc<dyn ICreatePortfolioUseCase + Send + Sync>,
    get_portfolio: Arc<dyn IGetPortfolioUseCase + Send + Sync>,
    exists_portfolio: Arc<dyn IExistsPortfolioUseCase + Send + Sync>,
    update_basic_info: Arc<dyn IUpdateBasicInfoUseCase + Send + Sync>,
    add_item: Arc<dyn IAddItemUseCase + Send + Sync>,
    update_item: Arc<dyn IUpdateItemUseCase + Send + Sync>,
    delete_item: Arc<dyn IDeleteItemUseCase + Send + Sync>,
    reorder_items: Arc<dyn IReorderItemsUseCase + Send + Sync>,
    delete_portfolio: Arc<dyn IDeletePortfolioUseCase + Send + Sync>,
    search_candidates: Arc<dyn ISearchCandidatesUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_portfolio: Arc::new(StubCreatePortfolioUseCase),
            get_portfolio: Arc::new(StubGetPortfolioUseCase),
            exists_portfolio: Arc::new(StubExistsPortfolioUseCase),
            update_basic_info: Arc::new(StubUpdateBasicInfoUseCase),
            add_item: Arc::new(StubAddItemUseCase),
            update_item: Arc::new(StubUpdateItemUseCase),
            delete_item: Arc::new(StubDeleteItemUseCase),
            reorder_items: Arc::new(StubReorderItemsUseCase),
            delete_portfolio: Arc::new(StubDeletePortfolioUseCase),
            search_candidates: Arc::new(StubSearchCandidatesUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_portfolio(
        mut self,
        uc: impl ICreatePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_portfolio = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl IGetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_exists_portfolio(
        mut self,
        uc: impl IExistsPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.exists_portfolio = Arc::new(uc);
        self
    }

    pub fn with_update_basic_info(
        mut self,
        uc: impl IUpdateBasicInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_basic_info = Arc::new(uc);
        self
    }

    pub fn with_add_item(mut self, uc: impl IAddItemUseCase + Send + Sync + 'static) -> Self {
        self.add_item = Arc::new(uc);
        self
    }

    pub fn with_update_item(mut self, uc: impl IUpdateItemUseCase + Send + Sync + 'static) -> Self {
        self.update_item = Arc::new(uc);
        self
    }

    pub fn with_delete_item(mut self, uc: impl IDeleteItemUseCase + Send + Sync + 'static) -> Self {
        self.delete_item = Arc::new(uc);
        self
    }

    pub fn with_reorder_items(
        mut self,
        uc: impl IReorderItemsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reorder_items = Arc::new(uc);
        self
    }

    pub fn with_delete_portfolio(
        mut self,
        uc: impl IDeletePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_portfolio = Arc::new(uc);
        self
    }

    pub fn with_search_candidates(
        mut self,
        uc: impl ISearchCandidatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_candidates = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_portfolio_use_case: self.create_portfolio,
            get_portfolio_use_case: self.get_portfolio,
            exists_portfolio_use_case: self.exists_portfolio,
            update_basic_info_use_case: self.update_basic_info,
            add_item_use_case: self.add_item,
            update_item_use_case: self.update_item,
            delete_item_use_case: self.delete_item,
            reorder_items_use_case: self.reorder_items,
            delete_portfolio_use_case: self.delete_portfolio,
            search_candidates_use_case: self.search_candidates,
        })
    }
}
