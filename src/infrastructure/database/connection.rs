// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::DatabaseSettings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{debug, info};

/// 连接在池中的最长存活时间
const CONNECTION_MAX_LIFETIME: Duration = Duration::from_secs(3600);

/// 根据配置构建连接选项
///
/// 未配置的项使用 sea-orm 的默认值；`connect_timeout` 同时作为获取连接的超时
pub fn connect_options(settings: &DatabaseSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url.as_str());
    opt.max_lifetime(CONNECTION_MAX_LIFETIME).sqlx_logging(false);

    if let Some(max) = settings.max_connections {
        opt.max_connections(max);
    }
    if let Some(min) = settings.min_connections {
        opt.min_connections(min);
    }
    if let Some(secs) = settings.idle_timeout {
        opt.idle_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = settings.connect_timeout {
        opt.connect_timeout(Duration::from_secs(secs))
            .acquire_timeout(Duration::from_secs(secs));
    }

    opt
}

/// 创建数据库连接池
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接
/// * `Err(DbErr)` - 连接过程中出现的错误
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(settings)).await?;
    debug!(backend = ?db.get_database_backend(), "Database pool created");
    Ok(db)
}

/// 连接数据库并执行全部未应用的迁移
pub async fn connect_and_migrate(
    settings: &DatabaseSettings,
) -> Result<DatabaseConnection, DbErr> {
    let db = create_pool(settings).await?;
    Migrator::up(&db, None).await?;
    info!("Database migrations applied");
    Ok(db)
}
