use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::UploadFile;
use crate::modules::portfolio::application::use_cases::add_item::{
    AddItemError, IAddItemUseCase, NewItemData,
};
use crate::modules::portfolio::application::use_cases::create_portfolio::{
    CreatePortfolioError, ICreatePortfolioUseCase,
};
use crate::modules::portfolio::application::use_cases::delete_item::{
    DeleteItemError, IDeleteItemUseCase,
};
use crate::modules::portfolio::application::use_cases::delete_portfolio::{
    DeletePortfolioError, IDeletePortfolioUseCase,
};
use crate::modules::portfolio::application::use_cases::exists_portfolio::{
    ExistsPortfolioError, IExistsPortfolioUseCase,
};
use crate::modules::portfolio::application::use_cases::get_portfolio::{
    GetPortfolioError, IGetPortfolioUseCase,
};
use crate::modules::portfolio::application::use_cases::reorder_items::{
    IReorderItemsUseCase, ReorderItemsError,
};
use crate::modules::portfolio::application::use_cases::update_basic_info::{
    IUpdateBasicInfoUseCase, UpdateBasicInfoError,
};
use crate::modules::portfolio::application::use_cases::update_item::{
    IUpdateItemUseCase, UpdateItemData, UpdateItemError,
};
use crate::modules::portfolio::domain::entities::{BasicInfo, Portfolio};
use crate::modules::search::application::use_cases::search_candidates::{
    ISearchCandidatesUseCase, SearchCandidatesError, SearchCandidatesResult,
};

const UNUSED: &str = "not used in this test";

pub struct StubCreatePortfolioUseCase;

#[async_trait]
impl ICreatePortfolioUseCase for StubCreatePortfolioUseCase {
    async fn execute(
        &self,
        _job_seeker_id: Uuid,
        _basic_info: BasicInfo,
    ) -> Result<Portfolio, CreatePortfolioError> {
        Err(CreatePortfolioError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubGetPortfolioUseCase;

#[async_trait]
impl IGetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self, _job_seeker_id: Uuid) -> Result<Portfolio, GetPortfolioError> {
        Err(GetPortfolioError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubExistsPortfolioUseCase;

#[async_trait]
impl IExistsPortfolioUseCase for StubExistsPortfolioUseCase {
    async fn execute(&self, _job_seeker_id: Uuid) -> Result<bool, ExistsPortfolioError> {
        Err(ExistsPortfolioError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateBasicInfoUseCase;

#[async_trait]
impl IUpdateBasicInfoUseCase for StubUpdateBasicInfoUseCase {
    async fn execute(
        &self,
        _job_seeker_id: Uuid,
        _basic_info: BasicInfo,
    ) -> Result<Portfolio, UpdateBasicInfoError> {
        Err(UpdateBasicInfoError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubAddItemUseCase;

#[async_trait]
impl IAddItemUseCase for StubAddItemUseCase {
    async fn execute(
        &self,
        _job_seeker_id: Uuid,
        _data: NewItemData,
        _files: Vec<UploadFile>,
    ) -> Result<Portfolio, AddItemError> {
        Err(AddItemError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateItemUseCase;

#[async_trait]
impl IUpdateItemUseCase for StubUpdateItemUseCase {
    async fn execute(
        &self,
        _job_seeker_id: Uuid,
        _item_id: &str,
        _data: UpdateItemData,
        _files: Vec<UploadFile>,
    ) -> Result<Portfolio, UpdateItemError> {
        Err(UpdateItemError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeleteItemUseCase;

#[async_trait]
impl IDeleteItemUseCase for StubDeleteItemUseCase {
    async fn execute(&self, _job_seeker_id: Uuid, _item_id: &str) -> Result<(), DeleteItemError> {
        Err(DeleteItemError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubReorderItemsUseCase;

#[async_trait]
impl IReorderItemsUseCase for StubReorderItemsUseCase {
    async fn execute(
        &self,
        _job_seeker_id: Uuid,
        _ordered_item_ids: Vec<String>,
    ) -> Result<Portfolio, ReorderItemsError> {
        Err(ReorderItemsError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubDeletePortfolioUseCase;

#[async_trait]
impl IDeletePortfolioUseCase for StubDeletePortfolioUseCase {
    async fn execute(&self, _job_seeker_id: Uuid) -> Result<(), DeletePortfolioError> {
        Err(DeletePortfolioError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubSearchCandidatesUseCase;

#[async_trait]
impl ISearchCandidatesUseCase for StubSearchCandidatesUseCase {
    async fn execute(&self, _query: &str) -> Result<SearchCandidatesResult, SearchCandidatesError> {
        Err(SearchCandidatesError::RepositoryError(UNUSED.to_string()))
    }
}
