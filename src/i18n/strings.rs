// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static string tables

use super::{Language, StringId};

pub(super) fn lookup(lang: Language, id: StringId) -> &'static str {
    match lang {
        Language::Zh => zh(id),
        Language::En => en(id),
        Language::Ja => ja(id),
    }
}

fn zh(id: StringId) -> &'static str {
    match id {
        StringId::CheckGlobal => "国际网络连通性 (Google)",
        StringId::CheckGlobalFail => "你的地区受限 可尝试更换网络或者重试",
        StringId::CheckPrimary => "Rakko 主站连接",
        StringId::CheckPrimaryFail => "无法连接到 rakko 主站",
        StringId::CheckCdn => "CDN 节点状态 (Cloudflare)",
        StringId::CheckCdnFail => "cdn 连接失败",
        StringId::CheckBrowser => "浏览器环境兼容性",
        StringId::CheckBrowserFail => "浏览器版本太旧了",
        StringId::CheckBrowserWarn => "可能存在兼容问题",
        StringId::HeaderError => "检测到连接问题",
        StringId::HeaderWarning => "存在兼容性警告",
        StringId::HeaderSuccess => "环境检测通过",
        StringId::HeaderInitial => "诶？连接到 rakko 系网页失败了",
        StringId::SubChecking => "正在检查错误",
        StringId::SubError => "请根据下方提示修复问题后重试",
        StringId::SubWarning => "您的浏览器可能无法完美体验",
        StringId::NoticeTitle => "注意事项",
        StringId::NoticeWarnDesc => "虽然检测到兼容性提示，但您仍可尝试访问。",
        StringId::NoticeSuccessDesc => {
            "您的网络环境和浏览器均符合要求。刚才的连接失败可能是临时波动。"
        }
        StringId::BtnReload => "刷新页面重试",
        StringId::BtnReconnect => "尝试重新连接",
        StringId::BtnDetails => "详细信息",
        StringId::SysInfo => "系统信息",
        StringId::CurrBrowser => "当前浏览器",
    }
}

fn en(id: StringId) -> &'static str {
    match id {
        StringId::CheckGlobal => "Global Connectivity (Google)",
        StringId::CheckGlobalFail => "Region restricted. Try changing network.",
        StringId::CheckPrimary => "Rakko Main Site",
        StringId::CheckPrimaryFail => "Cannot connect to Rakko main site",
        StringId::CheckCdn => "CDN Status (Cloudflare)",
        StringId::CheckCdnFail => "CDN connection failed",
        StringId::CheckBrowser => "Browser Compatibility",
        StringId::CheckBrowserFail => "Browser version is too old",
        StringId::CheckBrowserWarn => "Compatibility issues may exist",
        StringId::HeaderError => "Connection Issues Detected",
        StringId::HeaderWarning => "Compatibility Warnings",
        StringId::HeaderSuccess => "Environment Check Passed",
        StringId::HeaderInitial => "oh? Failed to connect to Rakko system.",
        StringId::SubChecking => "Checking for errors",
        StringId::SubError => "Please fix the issues below and retry",
        StringId::SubWarning => "Your browser may not provide the best experience",
        StringId::NoticeTitle => "Notices",
        StringId::NoticeWarnDesc => "Compatibility issues detected, but you can proceed.",
        StringId::NoticeSuccessDesc => {
            "Environment meets requirements. Failure might be temporary."
        }
        StringId::BtnReload => "Refresh and Retry",
        StringId::BtnReconnect => "Reconnect",
        StringId::BtnDetails => "Details",
        StringId::SysInfo => "System Info",
        StringId::CurrBrowser => "Current Browser",
    }
}

fn ja(id: StringId) -> &'static str {
    match id {
        StringId::CheckGlobal => "国際ネットワーク接続 (Google)",
        StringId::CheckGlobalFail => "地域制限があります。回線を変更してください。",
        StringId::CheckPrimary => "Rakko メインサイト",
        StringId::CheckPrimaryFail => "メインサイトに接続できません",
        StringId::CheckCdn => "CDN ステータス (Cloudflare)",
        StringId::CheckCdnFail => "CDN 接続に失敗しました",
        StringId::CheckBrowser => "ブラウザ互換性",
        StringId::CheckBrowserFail => "ブラウザが古すぎます",
        StringId::CheckBrowserWarn => "互換性の問題がある可能性があります",
        StringId::HeaderError => "接続の問題が検出されました",
        StringId::HeaderWarning => "互換性の警告があります",
        StringId::HeaderSuccess => "環境チェック合格",
        StringId::HeaderInitial => "あれ？Rakko系ページへの接続に失敗しました",
        StringId::SubChecking => "エラーをチェックしています",
        StringId::SubError => "以下の問題を修正して再試行してください",
        StringId::SubWarning => "最適な体験が得られない可能性があります",
        StringId::NoticeTitle => "注意事項",
        StringId::NoticeWarnDesc => "互換性の警告がありますが、アクセス可能です。",
        StringId::NoticeSuccessDesc => "要件を満たしています。接続失敗は一時的なものです。",
        StringId::BtnReload => "ページを更新",
        StringId::BtnReconnect => "再接続",
        StringId::BtnDetails => "詳細情報",
        StringId::SysInfo => "システム情報",
        StringId::CurrBrowser => "現在のブラウザ",
    }
}
