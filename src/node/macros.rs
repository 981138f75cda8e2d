//! The `config_node!` schema macro.
//!
//! A configuration node is declared once as a property table: scalar values
//! (field, setter, type, wire name, default, validator) and nested nodes
//! (field, mutable accessor, node type, options type, wire name). From that
//! table the macro generates the node struct, its fully-optional options
//! struct, and the whole node contract described in [`crate::node`]:
//! `Default`, `Clone` (parent reset, fresh id), structural `PartialEq`,
//! `is_default`, `combine`, `apply_options`, `to_options`, validating
//! setters, getters, parent accessors, and serde glue that serializes the
//! sparse projection and validates on the way back in.

macro_rules! config_node {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Node:ident, options $Options:ident, wire $node_wire:literal {
            values {
                $(
                    $(#[$vmeta:meta])*
                    $vfield:ident, $vsetter:ident : $vty:ty,
                    wire $vwire:literal,
                    default $vdefault:expr,
                    validate $vvalidate:expr;
                )*
            }
            nodes {
                $(
                    $(#[$nmeta:meta])*
                    $nfield:ident, $nfield_mut:ident : $nty:ty > $nopts:ty,
                    wire $nwire:literal;
                )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $Node {
            $( $(#[$vmeta])* $vfield: $vty, )*
            $( $(#[$nmeta])* $nfield: $nty, )*
            id: $crate::node::NodeId,
            parent: ::core::option::Option<$crate::node::NodeId>,
        }

        #[doc = concat!("Sparse overlay for [`", stringify!($Node), "`]: every field optional, unset fields change nothing.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $Options {
            $(
                $(#[$vmeta])*
                #[serde(rename = $vwire, skip_serializing_if = "Option::is_none")]
                pub $vfield: ::core::option::Option<$vty>,
            )*
            $(
                $(#[$nmeta])*
                #[serde(rename = $nwire, skip_serializing_if = "Option::is_none")]
                pub $nfield: ::core::option::Option<$nopts>,
            )*
        }

        impl ::core::default::Default for $Node {
            fn default() -> Self {
                Self {
                    $( $vfield: $vdefault, )*
                    $( $nfield: <$nty as ::core::default::Default>::default(), )*
                    id: $crate::node::NodeId::fresh(),
                    parent: ::core::option::Option::None,
                }
            }
        }

        impl ::core::clone::Clone for $Node {
            /// Deep copy with fresh identity: nested nodes are cloned, never
            /// aliased, and the parent link is reset so the caller
            /// re-attaches the clone before use.
            fn clone(&self) -> Self {
                Self {
                    $( $vfield: ::core::clone::Clone::clone(&self.$vfield), )*
                    $( $nfield: ::core::clone::Clone::clone(&self.$nfield), )*
                    id: $crate::node::NodeId::fresh(),
                    parent: ::core::option::Option::None,
                }
            }
        }

        impl ::core::cmp::PartialEq for $Node {
            /// Structural equality over configuration values; identity and
            /// parent links are not compared.
            fn eq(&self, other: &Self) -> bool {
                $( self.$vfield == other.$vfield && )*
                $( self.$nfield == other.$nfield && )*
                true
            }
        }

        impl $Node {
            /// Create a node with every property at its default.
            #[inline]
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            $(
                $(#[$vmeta])*
                #[inline]
                pub fn $vfield(&self) -> &$vty {
                    &self.$vfield
                }

                #[doc = concat!("Set `", $vwire, "`, validating the value first; an out-of-domain value is rejected, not clamped.")]
                pub fn $vsetter(&mut self, value: $vty) -> $crate::Result<()> {
                    ($vvalidate)(&value).map_err(|reason| $crate::Error::Validation {
                        property: $vwire,
                        reason,
                    })?;
                    self.$vfield = value;
                    Ok(())
                }
            )*

            $(
                $(#[$nmeta])*
                #[inline]
                pub fn $nfield(&self) -> &$nty {
                    &self.$nfield
                }

                #[doc = concat!("Mutable access to the nested `", $nwire, "` node.")]
                #[inline]
                pub fn $nfield_mut(&mut self) -> &mut $nty {
                    &mut self.$nfield
                }
            )*

            /// Identity of this node.
            #[inline]
            pub fn id(&self) -> $crate::node::NodeId {
                self.id
            }

            /// Structural parent, if this node has been attached to a tree.
            #[inline]
            pub fn parent(&self) -> ::core::option::Option<$crate::node::NodeId> {
                self.parent
            }

            /// Attach this node to its structural parent. Set once by the
            /// tree that adopts the node.
            #[allow(dead_code)]
            #[inline]
            pub(crate) fn set_parent(&mut self, parent: $crate::node::NodeId) {
                self.parent = ::core::option::Option::Some(parent);
            }

            /// True iff every property equals its default and every nested
            /// node is itself default.
            pub fn is_default(&self) -> bool {
                $( self.$vfield == $vdefault && )*
                $( self.$nfield.is_default() && )*
                true
            }

            /// Fill still-default properties from `reference`; an
            /// explicitly-set local value always wins. Nested nodes are
            /// combined per property, not wholesale.
            pub fn combine(&mut self, reference: &Self) {
                $(
                    if self.$vfield == $vdefault {
                        self.$vfield = ::core::clone::Clone::clone(&reference.$vfield);
                    }
                )*
                $( self.$nfield.combine(&reference.$nfield); )*
            }

            /// Overlay the explicitly-set options fields through the
            /// validating setters. Fully-unset options are a no-op; an
            /// invalid overlay value fails exactly like direct assignment.
            pub fn apply_options(&mut self, options: &$Options) -> $crate::Result<()> {
                if options.is_default() {
                    return Ok(());
                }
                $(
                    if let ::core::option::Option::Some(value) = &options.$vfield {
                        self.$vsetter(::core::clone::Clone::clone(value))?;
                    }
                )*
                $(
                    if let ::core::option::Option::Some(child) = &options.$nfield {
                        self.$nfield.apply_options(child)?;
                    }
                )*
                Ok(())
            }

            /// Sparse projection: exactly the explicitly-set (non-default)
            /// properties, with fully-default nested nodes omitted.
            pub fn to_options(&self) -> $Options {
                $Options {
                    $(
                        $vfield: if self.$vfield == $vdefault {
                            ::core::option::Option::None
                        } else {
                            ::core::option::Option::Some(::core::clone::Clone::clone(&self.$vfield))
                        },
                    )*
                    $(
                        $nfield: {
                            let child = self.$nfield.to_options();
                            if child.is_default() {
                                ::core::option::Option::None
                            } else {
                                ::core::option::Option::Some(child)
                            }
                        },
                    )*
                }
            }

            #[doc = concat!("Serialize to an XML `<", $node_wire, ">` fragment; default properties are omitted.")]
            pub fn to_xml(&self) -> $crate::Result<::std::string::String> {
                ::quick_xml::se::to_string_with_root($node_wire, self)
                    .map_err(|e| $crate::Error::Xml(e.to_string()))
            }

            /// Deserialize from an XML fragment, validating every value.
            pub fn from_xml(xml: &str) -> $crate::Result<Self> {
                ::quick_xml::de::from_str(xml).map_err(|e| $crate::Error::Xml(e.to_string()))
            }

            /// Serialize to JSON; default properties are omitted.
            pub fn to_json(&self) -> $crate::Result<::std::string::String> {
                ::serde_json::to_string(self).map_err(|e| $crate::Error::Json(e.to_string()))
            }

            /// Deserialize from JSON, validating every value.
            pub fn from_json(json: &str) -> $crate::Result<Self> {
                ::serde_json::from_str(json).map_err(|e| $crate::Error::Json(e.to_string()))
            }
        }

        impl $Options {
            /// True when no field is set (nested options count as unset when
            /// absent or themselves fully unset).
            pub fn is_default(&self) -> bool {
                $( self.$vfield.is_none() && )*
                $( self.$nfield.as_ref().is_none_or(|child| child.is_default()) && )*
                true
            }
        }

        impl ::serde::Serialize for $Node {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&self.to_options(), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $Node {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let options = <$Options as ::serde::Deserialize>::deserialize(deserializer)?;
                let mut node = <Self as ::core::default::Default>::default();
                node.apply_options(&options)
                    .map_err(<D::Error as ::serde::de::Error>::custom)?;
                ::core::result::Result::Ok(node)
            }
        }
    };
}

pub(crate) use config_node;
