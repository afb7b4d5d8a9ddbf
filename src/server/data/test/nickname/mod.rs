use crate::server::{data::nickname::NicknameRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod replace_for_guild;
