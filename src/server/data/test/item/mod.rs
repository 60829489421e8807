use crate::{
    model::favorite::FavoriteKind,
    server::{data::item::ItemRepository, model::item::CreateItemParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
