use bfhl_form_common::FilterToggles;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bfhl-form")]
#[command(about = "BFHL分類APIへの送信とレスポンスのフィルタ表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（JSON）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 送信先エンドポイント（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// JSONとファイルを送信し、結果を表示
    Submit {
        /// 入力JSON（例: '{"data": ["A", "1", "b"]}'）
        #[arg(short, long)]
        json: String,

        /// 添付ファイル（Base64で送信）
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// 保存済みレスポンスJSONにフィルタを適用
    Filter {
        /// レスポンスJSONファイル
        #[arg(short, long)]
        response: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// ファイルを送信用Base64に変換して表示
    Encode {
        /// 対象ファイル
        #[arg(required = true)]
        file: PathBuf,
    },
}

/// フィルタのチェックボックス相当
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FilterArgs {
    /// 英字のみの要素を表示
    #[arg(long)]
    pub alpha: bool,

    /// 数値の要素を表示
    #[arg(long)]
    pub numbers: bool,

    /// highest_lowercase_alphabet を表示
    #[arg(long)]
    pub heigh: bool,
}

impl FilterArgs {
    pub fn toggles(&self) -> FilterToggles {
        FilterToggles::new(self.alpha, self.numbers, self.heigh)
    }
}
