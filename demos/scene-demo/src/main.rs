//! # 场景演示程序
//!
//! 演示如何使用注入容器把全局服务注入到场景树节点

use anyhow::Context;
use clap::Parser;
use component_macros::Injectable;
use di_abstractions::{CandidateType, DiContainer, Inject, NodeRef};
use di_impl::{DiContainerImpl, SceneGraph};
use infrastructure_composition::{ContainerBootstrapper, LoggingConfig};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "scene-demo")]
#[command(about = "Lorn 注入容器场景演示")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "demos/scene-demo/config/container.toml")]
    config: PathBuf,

    /// 生成的敌人数量
    #[arg(long, default_value_t = 3)]
    enemies: usize,

    /// 使用 JSON 日志，忽略配置文件中的 `[logging]` 段
    #[arg(long)]
    json: bool,
}

/// 音频混音器
#[derive(Debug, Default, Injectable)]
#[injectable(global)]
struct AudioMixer {
    played: AtomicU32,
}

impl AudioMixer {
    fn play(&self, clip: &str) {
        let count = self.played.fetch_add(1, Ordering::SeqCst) + 1;
        info!("播放音效 #{}: {}", count, clip);
    }
}

/// 计分板
#[derive(Debug, Default, Injectable)]
#[injectable(global)]
struct ScoreBoard {
    #[inject]
    mixer: Inject<AudioMixer>,
    score: AtomicU32,
}

impl ScoreBoard {
    fn add(&self, points: u32) -> anyhow::Result<()> {
        self.score.fetch_add(points, Ordering::SeqCst);
        self.mixer.require()?.play("score");
        Ok(())
    }

    fn total(&self) -> u32 {
        self.score.load(Ordering::SeqCst)
    }
}

/// 需要远程连接、无法默认构造的服务
#[derive(Debug, Injectable)]
#[injectable(global)]
struct Leaderboard {
    endpoint: String,
}

/// 关卡根节点，只负责向子节点级联
#[derive(Debug, Default, Injectable)]
#[injectable(cascade)]
struct Level {
    #[inject]
    container: Inject<DiContainerImpl>,
}

/// 玩家节点
#[derive(Debug, Default, Injectable)]
#[injectable(node)]
struct Player {
    #[inject]
    mixer: Inject<AudioMixer>,
    #[inject]
    score: Inject<ScoreBoard>,
}

/// 可以作为原型复制的敌人节点
#[derive(Debug, Default, Clone, Injectable)]
#[injectable(node)]
struct Enemy {
    #[inject]
    score: Inject<ScoreBoard>,
}

/// 不在场景中的界面控制器
#[derive(Debug, Default, Injectable)]
struct HudController {
    #[inject]
    score: Inject<ScoreBoard>,
}

fn build_scene() -> (Arc<SceneGraph>, Arc<Level>, Arc<Player>) {
    let scene = Arc::new(SceneGraph::new());
    scene.add_candidate(CandidateType::of::<AudioMixer>());
    scene.add_candidate(CandidateType::of::<ScoreBoard>());
    scene.add_candidate(CandidateType::with_factory::<Leaderboard, _>(|| None));
    scene.register_prototype::<Enemy>();

    let level = Arc::new(Level::default());
    let player = Arc::new(Player::default());
    let level_id = scene.add_root(level.clone());
    scene.add_child(level_id, player.clone());

    (scene, level, player)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (scene, level, player) = build_scene();

    let config_found = args.config.exists();
    let mut bootstrapper = ContainerBootstrapper::new(scene.clone());
    if config_found {
        bootstrapper = bootstrapper.with_config_file(&args.config);
    }
    bootstrapper = if args.json {
        bootstrapper.with_logging(LoggingConfig::production())
    } else if config_found {
        bootstrapper.with_configured_logging()
    } else {
        bootstrapper.with_logging(LoggingConfig::development())
    };

    let bootstrapped = bootstrapper.bootstrap().context("容器启动失败")?;
    if !config_found {
        warn!("配置文件不存在，已使用默认配置: {}", args.config.display());
    }
    let container = bootstrapped.container;
    if let Some(report) = &bootstrapped.report {
        info!("批量绑定结果: {:?}", report);
    }

    let level_container = level.container.require()?;
    info!("关卡持有的容器与启动容器相同: {}", level_container.ptr_eq(&container));

    player.score.require()?.add(10)?;
    player.mixer.require()?.play("jump");

    let level_node: NodeRef = level.clone();
    for index in 0..args.enemies {
        let prototype = Arc::new(Enemy::default());
        let enemy = container
            .instantiate_and_inject(&prototype, Some(&level_node))
            .with_context(|| format!("生成敌人 #{} 失败", index))?;
        enemy.score.require()?.add(5)?;
    }

    let hud = Arc::new(HudController::default());
    container.inject(&hud)?;
    info!("当前分数: {}", hud.score.require()?.total());

    if let Some(leaderboard) = container.resolve::<Leaderboard>() {
        info!("排行榜地址: {}", leaderboard.endpoint);
    } else {
        info!("排行榜服务未注册");
    }

    info!(
        "场景节点: {}, 可注入后代: {}",
        scene.len(),
        container.collect_injectable_descendants(&level_node).len()
    );
    for component in container.registered_components() {
        info!("已注册: [{}] {}", component.category, component.type_info);
    }
    info!("容器统计: {:?}", container.stats());

    Ok(())
}
