//! Integration tests for parsing a realistic `Methods` declaration.

use slack_codegen_core::{NamespaceInfo, count_methods};
use slack_codegen_parser::parse_methods_file;

const DECLARATION: &str = r#"import { EventEmitter } from 'eventemitter3';
import type { WebClient } from './WebClient';
import type { WebAPICallResult } from './WebClient';
export type MethodWithRequiredArgument<MethodArguments, MethodResult extends WebAPICallResult> = (options: MethodArguments) => Promise<MethodResult>;
export type MethodWithOptionalArgument<MethodArguments, MethodResult extends WebAPICallResult> = (options?: MethodArguments) => Promise<MethodResult>;
/**
 * A class that defines all Web API methods, their arguments type, their response type, and binds those methods to the
 * `apiCall` class method.
 */
export declare abstract class Methods extends EventEmitter<WebClientEvent> {
    protected constructor();
    abstract apiCall(method: string, options?: Record<string, unknown>): Promise<WebAPICallResult>;
    abstract filesUploadV2(options: FilesUploadV2Arguments): Promise<WebAPICallResult>;
    readonly admin: {
        analytics: {
            /**
             * @description Retrieve analytics data for a given date, presented as a compressed JSON file.
             * @see {@link https://api.slack.com/methods/admin.analytics.getFile `admin.analytics.getFile` API reference}.
             */
            getFile: MethodWithRequiredArgument<AdminAnalyticsGetFileArguments, AdminAnalyticsGetFileResponse>;
        };
        apps: {
            activities: {
                /**
                 * @description Get logs for a specified team/org.
                 */
                list: MethodWithOptionalArgument<AdminAppsActivitiesListArguments, AdminAppsActivitiesListResponse>;
            };
            approve: MethodWithRequiredArgument<AdminAppsApproveArguments, AdminAppsApproveResponse>;
        };
    };
    readonly api: {
        /**
         * @description Checks API calling code.
         */
        test: MethodWithOptionalArgument<APITestArguments, ApiTestResponse>;
    };
    readonly chat: {
        /**
         * @description Deletes a message.
         */
        delete: MethodWithRequiredArgument<ChatDeleteArguments, ChatDeleteResponse>;
        scheduledMessages: {
            /**
             * @description Returns a list of scheduled messages.
             */
            list: MethodWithOptionalArgument<ChatScheduledMessagesListArguments, ChatScheduledMessagesListResponse>;
        };
    };
    readonly channels: {
        /**
         * @deprecated Use `conversations.archive` instead.
         */
        archive: MethodWithRequiredArgument<ChannelsArchiveArguments, WebAPICallResult>;
    };
    readonly workflows: {
        featured: {};
    };
}
export * from '@slack/types';
"#;

fn find<'a>(namespaces: &'a [NamespaceInfo], name: &str) -> &'a NamespaceInfo {
    namespaces
        .iter()
        .find(|ns| ns.name == name)
        .unwrap_or_else(|| panic!("namespace {name} not found"))
}

#[test]
fn test_top_level_namespaces_in_source_order() {
    let namespaces = parse_methods_file(DECLARATION).unwrap();
    let names: Vec<_> = namespaces.iter().map(|ns| ns.name.as_str()).collect();
    assert_eq!(names, ["admin", "api", "chat", "channels", "workflows"]);
}

#[test]
fn test_method_count() {
    let namespaces = parse_methods_file(DECLARATION).unwrap();
    assert_eq!(count_methods(&namespaces), 7);
}

#[test]
fn test_api_paths_follow_nesting() {
    let namespaces = parse_methods_file(DECLARATION).unwrap();
    let admin = find(&namespaces, "admin");

    let paths: Vec<_> = admin.all_methods().map(|m| m.api_path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "admin.analytics.getFile",
            "admin.apps.approve",
            "admin.apps.activities.list",
        ]
    );
}

#[test]
fn test_documentation_is_mined() {
    let namespaces = parse_methods_file(DECLARATION).unwrap();

    let get_file = &find(&namespaces, "admin").sub_namespaces[0].methods[0];
    assert_eq!(
        get_file.description.as_deref(),
        Some("Retrieve analytics data for a given date, presented as a compressed JSON file.")
    );

    let archive = &find(&namespaces, "channels").methods[0];
    assert!(archive.deprecated);
    assert!(archive.description.is_none());
}

#[test]
fn test_empty_nested_namespace_dropped_parent_kept() {
    let namespaces = parse_methods_file(DECLARATION).unwrap();
    let workflows = find(&namespaces, "workflows");
    assert!(workflows.is_empty());
    assert!(workflows.sub_namespaces.is_empty());
}

#[test]
fn test_reserved_method_name_preserved() {
    let namespaces = parse_methods_file(DECLARATION).unwrap();
    let chat = find(&namespaces, "chat");
    assert_eq!(chat.methods[0].name, "delete");
    assert_eq!(chat.methods[0].api_path, "chat.delete");
    assert_eq!(
        chat.sub_namespaces[0].methods[0].api_path,
        "chat.scheduledMessages.list"
    );
}

#[test]
fn test_class_member_fields_as_any() {
    let source = "export declare class Methods {\n    apiCall: any;\n    filesUploadV2: any;\n    chat: {\n        postMessage: MethodWithRequiredArgument<ChatPostMessageArguments, ChatPostMessageResponse>;\n    };\n}\n";

    let namespaces = parse_methods_file(source).unwrap();
    assert_eq!(namespaces.len(), 1);
    assert_eq!(namespaces[0].methods[0].api_path, "chat.postMessage");
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_methods_file(DECLARATION).unwrap();
    let second = parse_methods_file(DECLARATION).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_file_without_methods_class() {
    let err = parse_methods_file("export declare class WebClient {}\n").unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("Methods"));
}
