//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::Path;
use std::sync::Arc;

use common::adapter::{ConsoleLog, FanoutLog, FileJsonLog, ReqwestTransport, StdClock, StdEnvResolver};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, HttpTransport, Log};

use crate::adapter::{
    ApiClient, EnvCredentials, HttpLearnerProfile, HttpSessionApi, RandJitter, ThreadPacer,
};
use crate::domain::RunConfig;
use crate::ports::outbound::{JitterSource, Pacer};
use crate::usecase::farm::{FarmDeps, XpFarmUseCase};

/// main の Runner が持つ共通依存
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
}

/// 配線: コンソール（と指定があれば JSONL ファイル）へのロガー
pub fn wire_logger(verbose: bool, log_file: Option<&Path>) -> Arc<dyn Log> {
    let console: Arc<dyn Log> = Arc::new(ConsoleLog::new(verbose));
    match log_file {
        Some(path) => Arc::new(FanoutLog::new(vec![console, Arc::new(FileJsonLog::new(path))])),
        None => console,
    }
}

pub fn wire_app(verbose: bool, log_file: Option<&Path>) -> App {
    App {
        env_resolver: Arc::new(StdEnvResolver),
        logger: wire_logger(verbose, log_file),
    }
}

/// 外界に触れる部分を差し替え可能にした組み立て
pub struct FarmAdapters {
    pub transport: Arc<dyn HttpTransport>,
    pub pacer: Arc<dyn Pacer>,
    pub jitter: Arc<dyn JitterSource>,
    pub clock: Arc<dyn Clock>,
}

pub fn wire_farm_with(
    config: RunConfig,
    adapters: FarmAdapters,
    env_resolver: Arc<dyn EnvResolver>,
    log: Arc<dyn Log>,
) -> XpFarmUseCase {
    let client = Arc::new(ApiClient::new(adapters.transport, config.api.clone()));
    let deps = FarmDeps {
        credentials: Arc::new(EnvCredentials::new(env_resolver)),
        profile: Arc::new(HttpLearnerProfile::new(Arc::clone(&client))),
        sessions: Arc::new(HttpSessionApi::new(client)),
        pacer: adapters.pacer,
        jitter: adapters.jitter,
        clock: adapters.clock,
        log,
    };
    XpFarmUseCase::new(deps, config)
}

/// 配線: 標準アダプタ（reqwest / thread::sleep / rand / SystemTime）で XpFarmUseCase を組み立てる
pub fn wire_farm(config: RunConfig, app: &App) -> Result<XpFarmUseCase, Error> {
    let adapters = FarmAdapters {
        transport: Arc::new(ReqwestTransport::new()?),
        pacer: Arc::new(ThreadPacer),
        jitter: Arc::new(RandJitter),
        clock: Arc::new(StdClock),
    };
    Ok(wire_farm_with(
        config,
        adapters,
        Arc::clone(&app.env_resolver),
        Arc::clone(&app.logger),
    ))
}
